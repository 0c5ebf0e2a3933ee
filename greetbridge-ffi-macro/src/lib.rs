use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, ReturnType, Type, parse_macro_input};

/// Guard a C-ABI export so a Rust panic never unwinds into the foreign caller
///
/// This macro:
/// 1. Keeps the function signature and attributes (`no_mangle`, docs) unchanged
/// 2. Moves the body into a closure run under `std::panic::catch_unwind`
/// 3. Returns a fallback value when the body panics
///
/// Fallbacks by return type:
/// - `*mut T` - `std::ptr::null_mut()`
/// - `*const T` - `std::ptr::null()`
/// - `()` - nothing
/// - anything else - `Default::default()`
///
/// Example:
/// ```rust,ignore
/// #[greetbridge_ffi_macro::ffi_boundary]
/// #[unsafe(no_mangle)]
/// pub unsafe extern "C" fn greetbridge_greet(person: *const c_char) -> *mut c_char {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn ffi_boundary(_args: TokenStream, input: TokenStream) -> TokenStream {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let (ret_ty, fallback) = match &sig.output {
        ReturnType::Default => (quote!(()), quote!(())),
        ReturnType::Type(_, ty) => (quote!(#ty), fallback_for(ty)),
    };

    TokenStream::from(quote! {
        #(#attrs)*
        #vis #sig {
            let __ffi_body = move || -> #ret_ty #block;
            match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(__ffi_body)) {
                Ok(__ffi_value) => __ffi_value,
                Err(_) => #fallback,
            }
        }
    })
}

fn fallback_for(ty: &Type) -> proc_macro2::TokenStream {
    match ty {
        Type::Ptr(ptr) if ptr.mutability.is_some() => quote!(::std::ptr::null_mut()),
        Type::Ptr(_) => quote!(::std::ptr::null()),
        Type::Tuple(tuple) if tuple.elems.is_empty() => quote!(()),
        _ => quote!(::core::default::Default::default()),
    }
}
