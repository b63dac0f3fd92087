use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{quote, ToTokens};
use syn::{
  ext::IdentExt, spanned::Spanned, Data, DataStruct, DeriveInput, Error as SynError, Field,
  Ident, Index, LitStr, Member, Result as SynResult, Type
};

struct FieldInfo {
  field:  Field,
  member: Member
}

struct StructInfo {
  derived: DeriveInput,
  fields:  Vec<FieldInfo>
}

impl StructInfo {
  fn get_data_struct(input: &DeriveInput) -> SynResult<&DataStruct> {
    match &input.data {
      Data::Struct(data) => Ok(data),
      Data::Enum(data) => {
        Err(SynError::new_spanned(
          data.enum_token,
          "Expected struct but found enum."
        ))
      }
      Data::Union(data) => {
        Err(SynError::new_spanned(
          data.union_token,
          "Expected struct but found union."
        ))
      }
    }
  }

  fn get_fields(data: &DataStruct) -> Vec<FieldInfo> {
    data
      .fields
      .iter()
      .enumerate()
      .map(|(i, field)| {
        let member = match &field.ident {
          Some(ident) => Member::Named(ident.clone()),
          None => {
            Member::Unnamed(Index {
              index: i as u32,
              span:  field.span()
            })
          }
        };
        FieldInfo {
          field: field.clone(),
          member
        }
      })
      .collect()
  }

  fn parse(input: TokenStream2) -> SynResult<Self> {
    let derived: DeriveInput = syn::parse2(input)?;

    if let Some(attr) = derived
      .attrs
      .iter()
      .find(|attr| attr.path().is_ident("repr"))
    {
      return Err(SynError::new_spanned(
        attr,
        "Adding `repr` manually is not supported."
      ));
    }

    let fields = Self::get_fields(Self::get_data_struct(&derived)?);

    Ok(StructInfo { derived, fields })
  }
}

/// Path under which the generated impl refers to the runtime crate.
fn runtime_crate() -> TokenStream2 {
  match crate_name("struct_padding") {
    Ok(FoundCrate::Itself) => quote!(crate),
    Ok(FoundCrate::Name(name)) => {
      let ident = Ident::new(&name, Span::call_site());
      quote!(::#ident)
    }
    Err(_) => quote!(::struct_padding)
  }
}

fn member_label(member: &Member) -> String {
  match member {
    Member::Named(ident) => ident.unraw().to_string(),
    Member::Unnamed(index) => index.index.to_string()
  }
}

/// Renders a field type the way it was written, minus the token spacing
/// `proc_macro2` inserts between punctuation.
fn type_label(ty: &Type) -> String {
  let raw = ty.to_token_stream().to_string();
  let chars = raw.chars().collect::<Vec<_>>();
  let is_word = |c: char| c.is_alphanumeric() || c == '_';

  let mut label = String::with_capacity(raw.len());
  for (i, &c) in chars.iter().enumerate() {
    if c != ' ' {
      label.push(c);
      continue;
    }
    let prev = i.checked_sub(1).map(|p| chars[p]);
    let next = chars.get(i + 1).copied();
    let before_arrow = chars.get(i + 1..i + 3) == Some(&['-', '>'][..]);
    let after_arrow = i >= 2 && chars[i - 2..i] == ['-', '>'];
    match (prev, next) {
      (Some(p), Some(n)) if is_word(p) && is_word(n) => label.push(' '),
      (Some(',' | ';'), Some(_)) => label.push(' '),
      (Some(_), Some(_)) if before_arrow || after_arrow => label.push(' '),
      _ => {}
    }
  }
  label
}

fn expand(attr: TokenStream2, input: TokenStream2) -> SynResult<TokenStream2> {
  let display_name = syn::parse2::<Option<LitStr>>(attr)?;
  let struct_info = StructInfo::parse(input)?;

  let name = &struct_info.derived.ident;
  let display = match display_name {
    Some(lit) if lit.value().is_empty() => {
      return Err(SynError::new(lit.span(), "Display name can't be empty."));
    }
    Some(lit) => lit.value(),
    None => name.unraw().to_string()
  };

  let krate = runtime_crate();
  let (impl_generics, ty_generics, where_clause) = struct_info.derived.generics.split_for_impl();

  let fields = struct_info
    .fields
    .iter()
    .map(|f| {
      let member = &f.member;
      let typename = &f.field.ty;
      let label = member_label(member);
      let type_label = type_label(typename);
      quote! {
        #krate::FieldLayout {
          name:      #label,
          type_name: #type_label,
          offset:    ::core::mem::offset_of!(#name #ty_generics, #member),
          size:      ::core::mem::size_of::<#typename>(),
          align:     ::core::mem::align_of::<#typename>()
        }
      }
    })
    .collect::<Vec<_>>();

  let derived = &struct_info.derived;

  Ok(quote! {
    #[repr(C)]
    #derived

    impl #impl_generics #krate::LayoutReport for #name #ty_generics #where_clause {
      const NAME: &'static str = #display;
      const SIZE: usize = ::core::mem::size_of::<Self>();
      const ALIGN: usize = ::core::mem::align_of::<Self>();
      const FIELDS: &'static [#krate::FieldLayout] = &[#(#fields),*];
    }
  })
}

/// Pins a struct to its declaration order and implements `LayoutReport` for it.
///
/// The macro adds `repr(C)` to the struct it's applied to, so padding shows up
/// exactly where the field order puts it. Every constant of the generated impl
/// comes from `core::mem::{size_of, align_of, offset_of}`.
///
/// An optional string literal overrides the name the struct is reported under.
///
/// <p style="background:rgba(255,181,77,0.16);padding:0.75em;">
/// <strong>Warning:</strong> The attribute has to be defined before any derive attributes.
/// </p>
///
/// # Example
/// ```rust,ignore
/// use ::struct_padding::{layout_report, LayoutReport};
///
/// #[layout_report]
/// pub struct Example {
///   a: bool,
///   b: u64
/// }
///
/// assert_eq!(Example::SIZE, 16);
/// assert_eq!(Example::padding_bytes(), 7);
/// ```
///
/// Will expand to:
/// ```rust,ignore
/// #[repr(C)]
/// pub struct Example {
///   a: bool,
///   b: u64
/// }
///
/// impl ::struct_padding::LayoutReport for Example {
///   const NAME: &'static str = "Example";
///   const SIZE: usize = ::core::mem::size_of::<Self>();
///   const ALIGN: usize = ::core::mem::align_of::<Self>();
///   const FIELDS: &'static [::struct_padding::FieldLayout] = &[
///     ::struct_padding::FieldLayout {
///       name:      "a",
///       type_name: "bool",
///       offset:    ::core::mem::offset_of!(Example, a),
///       size:      ::core::mem::size_of::<bool>(),
///       align:     ::core::mem::align_of::<bool>()
///     },
///     // ...
///   ];
/// }
/// ```
#[proc_macro_attribute]
pub fn layout_report(attr: TokenStream, input: TokenStream) -> TokenStream {
  expand(attr.into(), input.into())
    .unwrap_or_else(SynError::into_compile_error)
    .into()
}
