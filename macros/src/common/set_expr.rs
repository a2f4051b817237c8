// Set expression parsing and expansion for `set_expr!`

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Expr, Token,
};

use super::parse_operand;

// =============================================================================
// Set Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum SetExpr {
    Operand(Expr),
    Union(Box<SetExpr>, Box<SetExpr>),
    SymmetricDifference(Box<SetExpr>, Box<SetExpr>),
    Intersect(Box<SetExpr>, Box<SetExpr>),
    Difference(Box<SetExpr>, Box<SetExpr>),
    Complement(Box<SetExpr>),
}

impl Parse for SetExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(Span::call_site(), "expected a set expression"));
        }
        parse_union(input)
    }
}

// Recursive descent parser, loosest first:
// Union (|) -> SymmetricDifference (^) -> Intersect (&) -> Difference (-) -> Unary (!) -> Primary

fn parse_union(input: ParseStream) -> syn::Result<SetExpr> {
    let mut lhs = parse_symmetric_difference(input)?;

    while input.peek(Token![|]) {
        if input.peek(Token![||]) {
            let token: Token![||] = input.parse()?;
            return Err(syn::Error::new_spanned(token, "`||` is not a set operator, use `|` for union"));
        }
        input.parse::<Token![|]>()?;
        let rhs = parse_symmetric_difference(input)?;
        lhs = SetExpr::Union(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_symmetric_difference(input: ParseStream) -> syn::Result<SetExpr> {
    let mut lhs = parse_intersect(input)?;

    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let rhs = parse_intersect(input)?;
        lhs = SetExpr::SymmetricDifference(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_intersect(input: ParseStream) -> syn::Result<SetExpr> {
    let mut lhs = parse_difference(input)?;

    while input.peek(Token![&]) {
        if input.peek(Token![&&]) {
            let token: Token![&&] = input.parse()?;
            return Err(syn::Error::new_spanned(token, "`&&` is not a set operator, use `&` for intersection"));
        }
        input.parse::<Token![&]>()?;
        let rhs = parse_difference(input)?;
        lhs = SetExpr::Intersect(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_difference(input: ParseStream) -> syn::Result<SetExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let rhs = parse_unary(input)?;
        lhs = SetExpr::Difference(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<SetExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(SetExpr::Complement(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<SetExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else if input.peek(syn::token::Brace) {
        // `{ any_rust_expression }`
        let block: syn::ExprBlock = input.parse()?;
        Ok(SetExpr::Operand(Expr::Block(block)))
    } else {
        Ok(SetExpr::Operand(parse_operand(input)?))
    }
}

// =============================================================================
// SetExpr Utilities
// =============================================================================

/// Render a SetExpr fully parenthesized, e.g. `(a | (b & !c))`
#[cfg(test)]
pub fn set_expr_to_string(expr: &SetExpr) -> String {
    let binary = |op: &str, lhs: &SetExpr, rhs: &SetExpr| {
        format!("({} {} {})", set_expr_to_string(lhs), op, set_expr_to_string(rhs))
    };
    match expr {
        SetExpr::Operand(operand) => quote!(#operand).to_string().replace(' ', ""),
        SetExpr::Union(lhs, rhs) => binary("|", lhs, rhs),
        SetExpr::SymmetricDifference(lhs, rhs) => binary("^", lhs, rhs),
        SetExpr::Intersect(lhs, rhs) => binary("&", lhs, rhs),
        SetExpr::Difference(lhs, rhs) => binary("-", lhs, rhs),
        SetExpr::Complement(operand) => format!("!{}", set_expr_to_string(operand)),
    }
}

/// Convert SetExpr to a chain of combinator calls.
///
/// Operands are borrowed, so every leaf stays usable after the macro.
pub fn set_expr_to_calls(expr: &SetExpr) -> TokenStream {
    match expr {
        SetExpr::Operand(operand) => quote! { (#operand) },
        SetExpr::Union(lhs, rhs) => {
            let l = set_expr_to_calls(lhs);
            let r = set_expr_to_calls(rhs);
            quote! { #l.union(&#r) }
        }
        SetExpr::SymmetricDifference(lhs, rhs) => {
            let l = set_expr_to_calls(lhs);
            let r = set_expr_to_calls(rhs);
            quote! { #l.symmetric_difference(&#r) }
        }
        SetExpr::Intersect(lhs, rhs) => {
            let l = set_expr_to_calls(lhs);
            let r = set_expr_to_calls(rhs);
            quote! { #l.intersect(&#r) }
        }
        SetExpr::Difference(lhs, rhs) => {
            let l = set_expr_to_calls(lhs);
            let r = set_expr_to_calls(rhs);
            quote! { #l.difference(&#r) }
        }
        SetExpr::Complement(operand) => {
            let o = set_expr_to_calls(operand);
            quote! { #o.complement() }
        }
    }
}

/// Full expansion: the call chain wrapped in a block that brings both
/// combinator traits into scope.
pub fn expand_set_expr(expr: &SetExpr) -> TokenStream {
    let calls = set_expr_to_calls(expr);
    quote! {
        {
            #[allow(unused_imports)]
            use ::tola_sets::{EnumerableOps as _, ImplicitOps as _};
            #calls
        }
    }
}
