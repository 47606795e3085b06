use crate::extractor::{EndpointClass, EndpointMethod, EndpointParam, EndpointSource};
use crate::parser::ParsedFile;
use crate::tags::{DeclaredType, HttpVerb, MethodTag, ParamTag};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;
use syn::punctuated::Punctuated;
use syn::{visit::Visit, Attribute, Expr, Lit, LitBool, LitStr, Meta, Token, Type, TypeParamBound};

/// Reads endpoint classes from attributes in parsed Rust source.
///
/// Every `impl` block is an endpoint class named after its self type. Its class-level path
/// comes from a `#[path("/prefix")]` attribute on the `impl` block, or on the `struct` of the
/// same name (which may live in another file).
///
/// ```ignore
/// #[path("/query")]
/// impl QueryApi {
///     #[get]
///     #[path("/resource")]
///     #[description("Run a query")]
///     pub fn query(&self, #[query_param("q")] #[iodocs_required] q: String) {}
/// }
/// ```
pub struct AttributeExtractor {
    parsed_files: Vec<ParsedFile>,
}

impl AttributeExtractor {
    pub fn new(parsed_files: Vec<ParsedFile>) -> Self {
        Self { parsed_files }
    }
}

impl EndpointSource for AttributeExtractor {
    fn endpoint_classes(&self) -> Vec<EndpointClass> {
        let mut visitor = AttributeVisitor::default();

        for parsed_file in &self.parsed_files {
            visitor.current_file = parsed_file.path.display().to_string();
            visitor.visit_file(&parsed_file.syntax_tree);
        }

        // Struct-level prefixes are only known once every file has been visited
        visitor
            .classes
            .into_iter()
            .map(|(mut class, explicit_path)| {
                class.path = explicit_path.or_else(|| visitor.struct_paths.get(&class.name).cloned());
                debug!(
                    "Endpoint class {} ({} methods, prefix {:?})",
                    class.name,
                    class.methods.len(),
                    class.path
                );
                class
            })
            .collect()
    }
}

#[derive(Default)]
struct AttributeVisitor {
    current_file: String,
    /// Classes with the path found on their own `impl` block, if any
    classes: Vec<(EndpointClass, Option<String>)>,
    struct_paths: HashMap<String, String>,
}

impl AttributeVisitor {
    fn method_from_fn(&self, class_name: &str, item: &syn::ImplItemFn) -> EndpointMethod {
        let context = format!("{}::{}", class_name, item.sig.ident);
        let mut method = EndpointMethod::new(item.sig.ident.to_string());
        let mut verb_path = None;

        for attr in &item.attrs {
            match self.method_tags(attr) {
                Ok((tags, path)) => {
                    method.tags.extend(tags);
                    if verb_path.is_none() {
                        verb_path = path;
                    }
                }
                Err(e) => self.report_malformed(attr, &context, e),
            }
        }

        // `#[get("/x")]` is shorthand for `#[get] #[path("/x")]`
        let has_path = method.tags.iter().any(|t| matches!(t, MethodTag::Path(_)));
        if let (false, Some(path)) = (has_path, verb_path) {
            method.tags.push(MethodTag::Path(path));
        }

        for input in &item.sig.inputs {
            if let syn::FnArg::Typed(pat_type) = input {
                let binding = match pat_type.pat.as_ref() {
                    syn::Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                    _ => "_".to_string(),
                };
                let mut param = EndpointParam::new(binding, classify_type(&pat_type.ty));
                for attr in &pat_type.attrs {
                    match param_tag(attr) {
                        Ok(Some(tag)) => param.tags.push(tag),
                        Ok(None) => {}
                        Err(e) => self.report_malformed(attr, &context, e),
                    }
                }
                method.params.push(param);
            }
        }

        method
    }

    /// Method tags carried by one attribute, plus the path argument of a verb attribute.
    fn method_tags(&self, attr: &Attribute) -> syn::Result<(Vec<MethodTag>, Option<String>)> {
        let Some(name) = attr_name(attr) else {
            return Ok((Vec::new(), None));
        };

        if let Some(verb) = HttpVerb::from_name(&name) {
            return Ok((vec![MethodTag::Verb(verb)], verb_path(attr)));
        }

        let tags = match name.as_str() {
            "path" => vec![MethodTag::Path(single_string(attr)?)],
            "description" => vec![MethodTag::Description(single_string(attr)?)],
            "descriptions" => string_args(attr)?
                .into_iter()
                .map(MethodTag::Description)
                .collect(),
            "iodocs_name" => vec![MethodTag::Name(single_string(attr)?)],
            "iodocs_ignore" => vec![MethodTag::Ignore],
            _ => Vec::new(),
        };
        Ok((tags, None))
    }

    fn report_malformed(&self, attr: &Attribute, context: &str, error: syn::Error) {
        warn!(
            "Skipping malformed #[{}] on {} in {}: {}",
            attr_name(attr).unwrap_or_default(),
            context,
            self.current_file,
            error
        );
    }
}

impl<'ast> Visit<'ast> for AttributeVisitor {
    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        if let Some(path) = self.class_path(&node.attrs, &node.ident.to_string()) {
            self.struct_paths.insert(node.ident.to_string(), path);
        }
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        let Some(class_name) = type_name(&node.self_ty) else {
            debug!("Skipping impl block with unnamed self type in {}", self.current_file);
            return;
        };

        // Trait methods are public through the trait; inherent ones must be `pub`
        let is_trait_impl = node.trait_.is_some();
        let mut class = EndpointClass::new(class_name.clone());

        for item in &node.items {
            if let syn::ImplItem::Fn(item_fn) = item {
                if is_trait_impl || matches!(item_fn.vis, syn::Visibility::Public(_)) {
                    class.methods.push(self.method_from_fn(&class_name, item_fn));
                }
            }
        }

        let explicit_path = self.class_path(&node.attrs, &class_name);
        self.classes.push((class, explicit_path));
    }
}

impl AttributeVisitor {
    fn class_path(&self, attrs: &[Attribute], context: &str) -> Option<String> {
        let attr = attrs
            .iter()
            .find(|attr| attr_name(attr).as_deref() == Some("path"))?;
        match single_string(attr) {
            Ok(path) => Some(path),
            Err(e) => {
                self.report_malformed(attr, context, e);
                None
            }
        }
    }
}

fn param_tag(attr: &Attribute) -> syn::Result<Option<ParamTag>> {
    let Some(name) = attr_name(attr) else {
        return Ok(None);
    };

    let tag = match name.as_str() {
        "query_param" => ParamTag::Query(single_string(attr)?),
        "path_param" => ParamTag::Path(single_string(attr)?),
        "header_param" => ParamTag::Header(single_string(attr)?),
        "description" => ParamTag::Description(single_string(attr)?),
        "iodocs_required" => ParamTag::Required,
        "iodocs_ignore" => ParamTag::Ignore,
        "iodocs_do_not_extend" => ParamTag::DoNotExtend,
        "iodocs_default_boolean" => ParamTag::DefaultBoolean(attr.parse_args::<LitBool>()?.value),
        "iodocs_default_integer" => ParamTag::DefaultInteger(integer_arg(attr)?),
        "iodocs_default_string" => ParamTag::DefaultString(single_string(attr)?),
        "iodocs_enum" => ParamTag::Enum(string_args(attr)?),
        "iodocs_enum_descriptions" => ParamTag::EnumDescriptions(string_args(attr)?),
        _ => return Ok(None),
    };
    Ok(Some(tag))
}

/// Last segment of the attribute path, so `#[iodocs::get]` reads as `get`.
fn attr_name(attr: &Attribute) -> Option<String> {
    attr.path().segments.last().map(|s| s.ident.to_string())
}

/// String arguments of `#[name("a", "b")]` or `#[name = "a"]`; none for a bare `#[name]`.
fn string_args(attr: &Attribute) -> syn::Result<Vec<String>> {
    match &attr.meta {
        Meta::Path(_) => Ok(Vec::new()),
        Meta::List(_) => {
            let literals = attr.parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)?;
            Ok(literals.iter().map(LitStr::value).collect())
        }
        Meta::NameValue(name_value) => match &name_value.value {
            Expr::Lit(syn::ExprLit { lit: Lit::Str(s), .. }) => Ok(vec![s.value()]),
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        },
    }
}

/// First string literal of a verb attribute. Other route options (`guard = "..."`, ...) are
/// skipped, and unparseable arguments leave the verb without a path.
fn verb_path(attr: &Attribute) -> Option<String> {
    let string_literal = |expr: &Expr| match expr {
        Expr::Lit(syn::ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
        _ => None,
    };

    match &attr.meta {
        Meta::Path(_) => None,
        Meta::List(_) => attr
            .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)
            .ok()?
            .iter()
            .find_map(string_literal),
        Meta::NameValue(name_value) => string_literal(&name_value.value),
    }
}

fn single_string(attr: &Attribute) -> syn::Result<String> {
    let mut args = string_args(attr)?;
    if args.len() != 1 {
        return Err(syn::Error::new_spanned(attr, "expected exactly one string argument"));
    }
    Ok(args.remove(0))
}

fn integer_arg(attr: &Attribute) -> syn::Result<i64> {
    let expr = attr.parse_args::<Expr>()?;
    match &expr {
        Expr::Lit(syn::ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<i64>(),
        Expr::Unary(syn::ExprUnary { op: syn::UnOp::Neg(_), expr: inner, .. }) => match inner.as_ref() {
            Expr::Lit(syn::ExprLit { lit: Lit::Int(int), .. }) => Ok(-int.base10_parse::<i64>()?),
            _ => Err(syn::Error::new_spanned(&expr, "expected an integer literal")),
        },
        _ => Err(syn::Error::new_spanned(&expr, "expected an integer literal")),
    }
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Reduces a syntactic type to the kind the normalizer distinguishes.
fn classify_type(ty: &Type) -> DeclaredType {
    match ty {
        Type::Reference(reference) => classify_type(&reference.elem),
        Type::Paren(paren) => classify_type(&paren.elem),
        Type::Group(group) => classify_type(&group.elem),
        Type::Slice(slice) if is_u8(&slice.elem) => DeclaredType::Bytes,
        Type::Array(array) if is_u8(&array.elem) => DeclaredType::Bytes,
        Type::ImplTrait(impl_trait) => classify_bounds(impl_trait.bounds.iter()),
        Type::TraitObject(trait_object) => classify_bounds(trait_object.bounds.iter()),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return DeclaredType::Other(String::new());
            };
            let name = segment.ident.to_string();
            match name.as_str() {
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "u128" | "usize" => DeclaredType::Integer,
                "bool" => DeclaredType::Boolean,
                "Option" | "Box" => match first_generic_arg(segment) {
                    Some(inner) => classify_type(inner),
                    None => DeclaredType::Other(name),
                },
                "Vec" => match first_generic_arg(segment) {
                    Some(inner) if is_u8(inner) => DeclaredType::Bytes,
                    _ => DeclaredType::Other(name),
                },
                "String" | "str" | "Cow" => DeclaredType::Text,
                "Bytes" | "BytesMut" => DeclaredType::Bytes,
                "File" | "BufReader" | "Stdin" | "Body" | "BodyStream" | "Payload" => DeclaredType::Stream,
                "Value" | "Json" | "Form" | "HashMap" | "BTreeMap" | "Multipart" => DeclaredType::Structured,
                _ => DeclaredType::Other(name),
            }
        }
        _ => DeclaredType::Other(String::new()),
    }
}

fn classify_bounds<'a>(mut bounds: impl Iterator<Item = &'a TypeParamBound>) -> DeclaredType {
    let readable = bounds.any(|bound| match bound {
        TypeParamBound::Trait(trait_bound) => trait_bound
            .path
            .segments
            .last()
            .map(|s| matches!(s.ident.to_string().as_str(), "Read" | "BufRead" | "AsyncRead" | "Stream"))
            .unwrap_or(false),
        _ => false,
    });
    if readable {
        DeclaredType::Stream
    } else {
        DeclaredType::Other("impl".to_string())
    }
}

fn first_generic_arg(segment: &syn::PathSegment) -> Option<&Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        args.args.iter().find_map(|arg| match arg {
            syn::GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
    } else {
        None
    }
}

fn is_u8(ty: &Type) -> bool {
    matches!(type_name(ty).as_deref(), Some("u8"))
}

/// Extracts endpoint classes from a single file, for callers that already hold a syntax tree.
pub fn extract_from_file(path: &Path, syntax_tree: syn::File) -> Vec<EndpointClass> {
    AttributeExtractor::new(vec![ParsedFile {
        path: path.to_path_buf(),
        syntax_tree,
    }])
    .endpoint_classes()
}
