// FFI header generation utilities
// Scans the Rust FFI sources and renders a C header for every exported symbol
//
// This file is also compiled into build.rs, so it must only depend on std,
// anyhow, syn and quote (never on crate:: paths).

use quote::ToTokens;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// File name of the generated header
pub const HEADER_FILE: &str = "greetbridge.h";

/// A function exported with an unmangled C symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFn {
    pub name: String,
    pub docs: Vec<String>,
    /// (parameter name, C type)
    pub params: Vec<(String, String)>,
    pub ret: String,
}

/// Generate the header into OUT_DIR (for use in build.rs)
pub fn generate_ffi_bindings() {
    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let ffi_dir = Path::new(&manifest_dir).join("src").join("ffi");

    if let Err(e) = write_header(&ffi_dir, &out_dir.join(HEADER_FILE)) {
        println!("cargo:warning=Failed to generate FFI header: {:#}", e);
    }
}

/// Generate the header (CLI version with proper error handling)
/// Returns the number of exported functions written
pub fn generate_ffi_bindings_cli(ffi_dir: &Path, output: &Path) -> Result<usize> {
    println!("FFI header generation - scanning {}", ffi_dir.display());
    let count = write_header(ffi_dir, output)?;
    println!("Found {} FFI functions", count);
    Ok(count)
}

/// Render the header for every export under `ffi_dir` and write it to `output`
pub fn write_header(ffi_dir: &Path, output: &Path) -> Result<usize> {
    if !ffi_dir.exists() {
        bail!("FFI source directory not found: {}", ffi_dir.display());
    }

    let mut rust_files = Vec::new();
    collect_rust_files(ffi_dir, &mut rust_files);
    rust_files.sort();

    let mut exports = Vec::new();
    for file_path in &rust_files {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        let found = extract_exports(&content)
            .with_context(|| format!("Failed to scan file: {}", file_path.display()))?;
        exports.extend(found);
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create header directory: {:?}", parent))?;
    }
    fs::write(output, render_header(&exports))
        .with_context(|| format!("Failed to write header: {}", output.display()))?;

    Ok(exports.len())
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_rust_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
}

/// Extract top-level `extern "C"` functions carrying `no_mangle` from a Rust source file
pub fn extract_exports(source: &str) -> Result<Vec<ExportedFn>> {
    let ast = syn::parse_file(source).context("Failed to parse Rust source")?;
    let mut exports = Vec::new();

    for item in &ast.items {
        let syn::Item::Fn(fn_item) = item else {
            continue;
        };
        if !is_c_export(fn_item) {
            continue;
        }

        let name = fn_item.sig.ident.to_string();
        let mut params = Vec::new();
        for input in &fn_item.sig.inputs {
            let syn::FnArg::Typed(pat_type) = input else {
                bail!("{}: methods cannot be exported", name);
            };
            let param_name = match &*pat_type.pat {
                syn::Pat::Ident(ident) => ident.ident.to_string(),
                other => bail!(
                    "{}: unsupported parameter pattern `{}`",
                    name,
                    other.to_token_stream()
                ),
            };
            let ty = c_type(&pat_type.ty).with_context(|| format!("{}: parameter {}", name, param_name))?;
            params.push((param_name, ty));
        }

        let ret = match &fn_item.sig.output {
            syn::ReturnType::Default => "void".to_string(),
            syn::ReturnType::Type(_, ty) => {
                c_type(ty).with_context(|| format!("{}: return type", name))?
            }
        };

        exports.push(ExportedFn {
            name,
            docs: doc_lines(&fn_item.attrs),
            params,
            ret,
        });
    }

    Ok(exports)
}

fn is_c_export(fn_item: &syn::ItemFn) -> bool {
    let is_c_abi = fn_item
        .sig
        .abi
        .as_ref()
        .and_then(|abi| abi.name.as_ref())
        .map(|name| name.value() == "C")
        .unwrap_or(false);

    // matches both #[no_mangle] and #[unsafe(no_mangle)]
    let is_unmangled = fn_item
        .attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .any(|attr| attr.to_token_stream().to_string().contains("no_mangle"));

    is_c_abi && is_unmangled
}

fn doc_lines(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Map a Rust FFI type to its C spelling
pub fn c_type(ty: &syn::Type) -> Result<String> {
    match ty {
        syn::Type::Ptr(ptr) => {
            let elem = c_type(&ptr.elem)?;
            if ptr.mutability.is_some() {
                Ok(format!("{} *", elem))
            } else if elem.ends_with('*') {
                Ok(format!("{} const *", elem))
            } else {
                Ok(format!("const {} *", elem))
            }
        }
        syn::Type::Tuple(tuple) if tuple.elems.is_empty() => Ok("void".to_string()),
        syn::Type::Path(path) => {
            let Some(last) = path.path.segments.last() else {
                bail!("empty type path");
            };
            let c = match last.ident.to_string().as_str() {
                "c_char" => "char",
                "c_void" => "void",
                "c_int" => "int",
                "c_uint" => "unsigned int",
                "c_long" => "long",
                "c_ulong" => "unsigned long",
                "bool" => "bool",
                "u8" => "uint8_t",
                "u16" => "uint16_t",
                "u32" => "uint32_t",
                "u64" => "uint64_t",
                "i8" => "int8_t",
                "i16" => "int16_t",
                "i32" => "int32_t",
                "i64" => "int64_t",
                "usize" => "size_t",
                "isize" => "ptrdiff_t",
                "f32" => "float",
                "f64" => "double",
                other => bail!("unsupported FFI type: {}", other),
            };
            Ok(c.to_string())
        }
        other => bail!("unsupported FFI type: {}", other.to_token_stream()),
    }
}

/// Join a C type and a declarator, keeping `*` attached to the name
fn declare(ty: &str, name: &str) -> String {
    if ty.ends_with('*') {
        format!("{}{}", ty, name)
    } else {
        format!("{} {}", ty, name)
    }
}

/// Render a C header declaring `exports`
pub fn render_header(exports: &[ExportedFn]) -> String {
    let mut code = String::from("/* Auto-generated C header for greetbridge */\n");
    code.push_str("/* DO NOT EDIT - This file is generated automatically */\n\n");
    code.push_str("#ifndef GREETBRIDGE_H\n#define GREETBRIDGE_H\n\n");
    code.push_str("#include <stdbool.h>\n#include <stddef.h>\n#include <stdint.h>\n\n");
    code.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");

    for export in exports {
        if !export.docs.is_empty() {
            code.push_str("/*\n");
            for line in &export.docs {
                if line.is_empty() {
                    code.push_str(" *\n");
                } else {
                    code.push_str(&format!(" * {}\n", line));
                }
            }
            code.push_str(" */\n");
        }

        let params = if export.params.is_empty() {
            "void".to_string()
        } else {
            export
                .params
                .iter()
                .map(|(name, ty)| declare(ty, name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        code.push_str(&format!("{}({});\n\n", declare(&export.ret, &export.name), params));
    }

    code.push_str("#ifdef __cplusplus\n} // extern \"C\"\n#endif\n\n");
    code.push_str("#endif /* GREETBRIDGE_H */\n");
    code
}
