mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Implements `ErrorKind` for a unit struct or a struct with named fields.
///
/// The report is described by an `#[error(...)]` attribute on the struct:
/// ```
/// use exact_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot divide `{}` by zero", numerator),
///     labels = ["this division"],
///     help = "check the denominator",
/// )]
/// pub struct ZeroDenominator {
///     numerator: String,
/// }
/// ```
///
/// - `message` (required): the headline of the report.
/// - `labels`: one label per span of the error, in the same order as the spans. A label whose
///   span is missing is left out, which lets errors without spans be reported too.
/// - `help`: what the user can change to make the input valid.
/// - `note`: additional context.
///
/// Every tag is an arbitrary expression, evaluated with the fields of the struct bound by name.
///
/// [`ErrorKind`]: https://docs.rs/exact-error/latest/exact_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::exact_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            #target
        }
    }.into()
}
