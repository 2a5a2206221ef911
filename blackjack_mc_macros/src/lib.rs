use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{self, Ident};

/// This macro is added before a method of `Round` struct in the impl block.
/// Use this macro to first check if current round phase is exactly the phase in
/// the attribute. Data carried by the phase (the hand index of `PlayerTurn`)
/// is ignored by the check.
///
/// For example, `#[allowed_phase(DealerTurn)]` will make a method first check
/// if current round phase is `DealerTurn`. If not, the method will return
/// `RoundError::WrongPhase` without touching the round.
///
/// `RoundPhase` and `RoundError` must be in scope where the method is defined.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase: Ident = syn::parse(attr).unwrap();
    let early_return = generate_phase_check(&phase, &ast.sig.ident);
    let early_return: syn::Stmt = syn::parse2(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}

fn generate_phase_check(phase: &Ident, function_name: &Ident) -> TokenStream2 {
    let operation = function_name.to_string();
    let expected = phase.to_string();
    quote! {
        if !matches!(self.current_phase, RoundPhase::#phase { .. }) {
            return Err(RoundError::WrongPhase {
                operation: #operation,
                expected: #expected,
                actual: self.current_phase,
            });
        }
    }
}
