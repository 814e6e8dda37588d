use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
#[derive(Debug)]
struct ErrorArg {
    tag: Ident,
    value: Expr,
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { tag, value })
    }
}

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub note: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        for arg in Punctuated::<ErrorArg, Token![,]>::parse_terminated(input)? {
            let slot = match arg.tag.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                "note" => &mut args.note,
                other => return Err(syn::Error::new_spanned(&arg.tag, format!("unknown tag `{}`", other))),
            };

            if slot.is_some() {
                return Err(syn::Error::new_spanned(&arg.tag, format!("duplicate tag `{}`", arg.tag)));
            }
            *slot = Some(arg.value);
        }

        Ok(args)
    }
}

/// Creates a `let` expression that destructures the given `ident` into its named fields. Returns
/// a compile error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // parse outer attributes, including documentation and `error` attributes
        let attributes = input.call(Attribute::parse_outer)?;
        let remaining = input.parse::<ItemStruct>()?;

        let mut error_args = ErrorArgs::default();
        if let Some(attr) = attributes.iter().find(|attr| attr.path().is_ident("error")) {
            error_args = attr.parse_args::<ErrorArgs>()?;
        }

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(
                &remaining.ident,
                "missing `message` tag in `#[error(...)]` attribute",
            ));
        }

        Ok(ErrorKindTarget {
            name: remaining.ident,
            fields: remaining.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = self.error_args.message.as_ref();
        let labels = self.error_args.labels
            .as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { ::std::vec::Vec::<::std::string::String>::new() });
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });
        let note = self.error_args.note.as_ref().map(|e| quote! { builder.set_note(#e); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure_expr

                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut builder = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(
                        #labels
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let mut label = ::ariadne::Label::new((src_id, span.clone()))
                                    .with_color(::exact_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<::std::vec::Vec<_>>()
                    );

                #help
                #note
                builder.finish()
            }
        });
    }
}
