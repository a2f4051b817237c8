//! Common parsing utilities
//!
//! Operand parsing for `set_expr!`. Operands are restricted to postfix
//! expressions so the set operators never get swallowed by a Rust binary
//! expression.

use syn::{
    ext::IdentExt,
    parse::ParseStream,
    punctuated::Punctuated,
    token, Expr, ExprCall, ExprField, ExprMethodCall, ExprPath, Ident, Index, Member, Token,
};

// =============================================================================
// Operand Parsing: `path`, `path(args)`, `.field`, `.method(args)`
// =============================================================================

/// Parse one operand: a path followed by any number of calls, field
/// accesses and method calls.
///
/// Used for every leaf of `set_expr!` that is not parenthesized or braced.
pub fn parse_operand(input: ParseStream) -> syn::Result<Expr> {
    if !(input.peek(Ident::peek_any) || input.peek(Token![::]) || input.peek(Token![<])) {
        return Err(input.error("expected a set operand (path, `{ block }` or parenthesized expression)"));
    }

    let path: ExprPath = input.parse()?;
    let mut expr = Expr::Path(path);

    if input.peek(token::Paren) {
        let content;
        let paren_token = syn::parenthesized!(content in input);
        expr = Expr::Call(ExprCall {
            attrs: Vec::new(),
            func: Box::new(expr),
            paren_token,
            args: parse_arguments(&content)?,
        });
    }

    while input.peek(Token![.]) && !input.peek(Token![..]) {
        let dot_token: Token![.] = input.parse()?;

        if input.peek(syn::LitInt) {
            let index: syn::LitInt = input.parse()?;
            expr = Expr::Field(ExprField {
                attrs: Vec::new(),
                base: Box::new(expr),
                dot_token,
                member: Member::Unnamed(Index {
                    index: index.base10_parse()?,
                    span: index.span(),
                }),
            });
            continue;
        }

        let name = input.call(Ident::parse_any)?;
        if input.peek(token::Paren) {
            let content;
            let paren_token = syn::parenthesized!(content in input);
            expr = Expr::MethodCall(ExprMethodCall {
                attrs: Vec::new(),
                receiver: Box::new(expr),
                dot_token,
                method: name,
                turbofish: None,
                paren_token,
                args: parse_arguments(&content)?,
            });
        } else {
            expr = Expr::Field(ExprField {
                attrs: Vec::new(),
                base: Box::new(expr),
                dot_token,
                member: Member::Named(name),
            });
        }
    }

    Ok(expr)
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse call arguments, any Rust expressions
fn parse_arguments(input: ParseStream) -> syn::Result<Punctuated<Expr, Token![,]>> {
    Punctuated::parse_terminated(input)
}
