//! Expansion of the `curry!` macro.
//!
//! The macro accepts either a closure literal (arity read from the
//! parameter list) or an arbitrary callable expression paired with an
//! explicit arity, and generates a chain of nested unary closures.
//!
//! # Generated Structure
//!
//! Each link of the chain clones the `Rc`-shared callable and the
//! `Rc`-shared prefix of already-applied arguments into the next link, so
//! partial applications are independent of one another and individually
//! reusable. The innermost link unwraps every shared prefix argument
//! (cloning only when another partial application still holds it) and
//! invokes the callable with the full argument list; the final argument
//! never passes through an `Rc` and therefore carries no `Clone` bound.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, LitInt, Token};

/// Parsed form of a `curry!` invocation: the callable expression and an
/// optional trailing arity literal.
struct CurryInput {
    callable: Expr,
    declared_arity: Option<LitInt>,
}

impl Parse for CurryInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let callable: Expr = input.parse()?;

        let declared_arity = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                None // trailing comma
            } else {
                let arity: LitInt = input.parse()?;
                if input.peek(Token![,]) {
                    input.parse::<Token![,]>()?;
                }
                Some(arity)
            }
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("curry! takes a callable and at most one arity literal"));
        }

        Ok(Self {
            callable,
            declared_arity,
        })
    }
}

pub fn expand(input: TokenStream) -> TokenStream {
    let parsed = syn::parse_macro_input!(input as CurryInput);

    match resolve_arity(&parsed) {
        Ok(arity) => {
            let callable = &parsed.callable;
            TokenStream::from(curried_chain(&quote! { #callable }, arity))
        }
        Err(error) => TokenStream::from(error.to_compile_error()),
    }
}

/// Determines the arity, reconciling the closure's parameter list with an
/// explicitly declared arity when both are present.
fn resolve_arity(parsed: &CurryInput) -> syn::Result<usize> {
    let declared = parsed
        .declared_arity
        .as_ref()
        .map(|literal| literal.base10_parse::<usize>())
        .transpose()?;

    let arity = match (&parsed.callable, declared) {
        (Expr::Closure(closure), None) => closure.inputs.len(),
        (Expr::Closure(closure), Some(declared_arity)) => {
            if closure.inputs.len() != declared_arity {
                return Err(syn::Error::new(
                    closure.span(),
                    format!(
                        "closure takes {} arguments but arity {} was declared",
                        closure.inputs.len(),
                        declared_arity
                    ),
                ));
            }
            declared_arity
        }
        (_, Some(declared_arity)) => declared_arity,
        (other, None) => {
            return Err(syn::Error::new(
                other.span(),
                "curry! cannot read the arity of this expression; \
                 spell it out: curry!(callable, 3)",
            ));
        }
    };

    if arity < 2 {
        return Err(syn::Error::new(
            Span::call_site(),
            "curry! requires an arity of at least 2",
        ));
    }

    Ok(arity)
}

/// Builds the nested-closure chain for the given arity.
fn curried_chain(callable: &TokenStream2, arity: usize) -> TokenStream2 {
    let arguments: Vec<Ident> = (0..arity)
        .map(|position| format_ident!("__pipelars_argument_{position}"))
        .collect();

    let mut body = final_invocation(&arguments);

    for position in (0..arity).rev() {
        let argument = &arguments[position];

        body = if position + 1 == arity {
            // Innermost link: the final argument goes straight to the call.
            quote! { move |#argument| { #body } }
        } else {
            let shared_prefix = arguments[..position].iter().map(|earlier| {
                quote! { let #earlier = ::std::rc::Rc::clone(&#earlier); }
            });

            quote! {
                move |#argument| {
                    let __pipelars_callable = ::std::rc::Rc::clone(&__pipelars_callable);
                    #(#shared_prefix)*
                    let #argument = ::std::rc::Rc::new(#argument);
                    #body
                }
            }
        };
    }

    quote! {
        {
            let __pipelars_callable = ::std::rc::Rc::new(#callable);
            #body
        }
    }
}

/// The innermost call: unwrap every shared prefix argument, pass the final
/// argument by value.
fn final_invocation(arguments: &[Ident]) -> TokenStream2 {
    let last = arguments.len() - 1;
    let unwrapped = arguments.iter().enumerate().map(|(position, argument)| {
        if position == last {
            quote! { #argument }
        } else {
            quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#argument)) }
        }
    });

    quote! { __pipelars_callable(#(#unwrapped),*) }
}
