//! Expansion of the `partial!` macro.
//!
//! A single scan over the argument list classifies each position as bound
//! (an expression, evaluated once at construction) or open (the `__`
//! placeholder, becoming a parameter of the produced closure). There is no
//! per-arity pattern table: any arity and any placeholder arrangement
//! expand through the same path.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

/// One argument position of the partial application.
enum Slot {
    /// A concrete expression, fixed at construction time.
    Bound(Expr),
    /// A `__` placeholder, left as a parameter of the produced closure.
    Open,
}

pub fn expand(input: TokenStream) -> TokenStream {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = match syn::parse::Parser::parse(parser, input) {
        Ok(expressions) => expressions,
        Err(error) => return TokenStream::from(error.to_compile_error()),
    };

    if expressions.len() < 2 {
        return TokenStream::from(
            syn::Error::new(
                Span::call_site(),
                "partial! takes a callable followed by at least one argument or `__` placeholder",
            )
            .to_compile_error(),
        );
    }

    let mut iterator = expressions.into_iter();
    let callable = iterator
        .next()
        .unwrap_or_else(|| unreachable!("length checked above"));

    let slots: Vec<Slot> = iterator
        .map(|expression| {
            if is_placeholder(&expression) {
                Slot::Open
            } else {
                Slot::Bound(expression)
            }
        })
        .collect();

    TokenStream::from(partial_closure(&callable, &slots))
}

/// A placeholder is the bare path `__`, matched as a token; the constant
/// of the same name in `pipelars::compose` exists only for documentation.
fn is_placeholder(expression: &Expr) -> bool {
    match expression {
        Expr::Path(path) => path.qself.is_none() && path.path.is_ident("__"),
        _ => false,
    }
}

fn partial_closure(callable: &Expr, slots: &[Slot]) -> TokenStream2 {
    let mut bindings = Vec::new();
    let mut parameters = Vec::new();
    let mut invocation_arguments = Vec::new();

    for (position, slot) in slots.iter().enumerate() {
        match slot {
            Slot::Bound(expression) => {
                let name = format_ident!("__pipelars_bound_{position}");
                bindings.push(quote! { let #name = #expression; });
                // Cloned per call so the partial application is reusable.
                invocation_arguments.push(quote! { #name.clone() });
            }
            Slot::Open => {
                let name = format_ident!("__pipelars_open_{position}");
                parameters.push(name.clone());
                invocation_arguments.push(quote! { #name });
            }
        }
    }

    quote! {
        {
            let __pipelars_callable = #callable;
            #(#bindings)*
            move |#(#parameters),*| __pipelars_callable(#(#invocation_arguments),*)
        }
    }
}
