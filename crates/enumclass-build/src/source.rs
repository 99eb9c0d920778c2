//! `SymbolProvider` over plain Rust source files.
//!
//! Each source is registered under the module path it is compiled as
//! (`crate::elements`). Items are indexed once; `use` declarations are kept
//! per module so enum references resolve the way they read in the file.

use crate::error::SourceError;
use enumclass_schema::{MARKER_ATTRIBUTE, prelude::*};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};
use syn::{
    Attribute, Expr, ExprLit, Fields, Item, ItemStruct, Lit, LitStr, Meta, Token, UseTree,
    Variant, punctuated::Punctuated,
};

///
/// SourceProvider
///

#[derive(Clone, Debug, Default)]
pub struct SourceProvider {
    declarations: Vec<DeclSymbol>,
    types: BTreeMap<String, TypeSymbol>,
    scopes: HashMap<String, Scope>,
}

///
/// Scope
///
/// Names brought in by `use` inside one module.
///

#[derive(Clone, Debug, Default)]
struct Scope {
    imports: HashMap<String, String>,
    globs: Vec<String>,
}

impl SourceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` as the body of `module`.
    pub fn add_source(&mut self, module: &str, source: &str) -> Result<(), SourceError> {
        let module = normalize_module(module)?;
        let file = syn::parse_file(source).map_err(|source| SourceError::Parse {
            module: module.clone(),
            source,
        })?;
        let lines: Vec<&str> = source.lines().collect();

        self.collect_items(&module, &file.items, &lines);

        Ok(())
    }

    /// Read and parse a file as the body of `module`.
    pub fn add_file(&mut self, module: &str, path: &Path) -> Result<(), SourceError> {
        let source = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.add_source(module, &source)
    }

    pub fn from_sources<'a, I>(sources: I) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut provider = Self::new();
        for (module, source) in sources {
            provider.add_source(module, source)?;
        }

        Ok(provider)
    }

    fn collect_items(&mut self, scope: &str, items: &[Item], lines: &[&str]) {
        for item in items {
            match item {
                Item::Struct(item) => self.add_struct(scope, item),
                Item::Enum(item) => {
                    let path = join(scope, &item.ident.to_string());
                    let symbol = EnumSymbol {
                        path: path.clone(),
                        repr: item.attrs.iter().find_map(repr_attr),
                        members: item
                            .variants
                            .iter()
                            .map(|variant| member_symbol(variant, lines))
                            .collect(),
                    };

                    self.types.insert(path, TypeSymbol::Enum(symbol));
                }
                Item::Type(item) => self.add_other(scope, &item.ident, "type alias"),
                Item::Union(item) => self.add_other(scope, &item.ident, "union"),
                Item::Trait(item) => self.add_other(scope, &item.ident, "trait"),
                Item::Use(item) => {
                    let entry = self.scopes.entry(scope.to_string()).or_default();
                    collect_use("", &item.tree, entry);
                }
                Item::Mod(item) => {
                    if let Some((_, content)) = &item.content {
                        let child = join(scope, &item.ident.to_string());
                        self.collect_items(&child, content, lines);
                    }
                }
                _ => {}
            }
        }
    }

    fn add_other(&mut self, scope: &str, ident: &syn::Ident, kind: &str) {
        let path = join(scope, &ident.to_string());

        self.types.insert(
            path.clone(),
            TypeSymbol::Other {
                path,
                kind: kind.to_string(),
            },
        );
    }

    fn add_struct(&mut self, scope: &str, item: &ItemStruct) {
        let name = item.ident.to_string();
        self.add_other(scope, &item.ident, "struct");

        let mut marker = None;
        let mut attributes = Vec::new();
        let mut derives = Vec::new();

        for attr in &item.attrs {
            if attr.path().is_ident(MARKER_ATTRIBUTE) {
                marker = Some(if marker.is_some() {
                    Err(SchemaError::InvalidMarker(format!(
                        "`{name}` carries more than one marker"
                    )))
                } else {
                    MarkerArgs::from_meta(&attr.meta)
                });
                continue;
            }

            if attr.path().is_ident("derive") {
                derives.extend(derive_names(attr));
            }
            attributes.push(attr.to_token_stream().to_string());
        }

        self.declarations.push(DeclSymbol {
            name,
            module_path: scope.to_string(),
            visibility: item.vis.to_token_stream().to_string(),
            attributes,
            derives,
            fieldless: item.fields.is_empty(),
            generic: !item.generics.params.is_empty(),
            marker,
        });
    }

    fn unique_suffix(&self, reference: &str) -> Option<TypeSymbol> {
        if reference.starts_with("self::") || reference.starts_with("super::") {
            return None;
        }

        let suffix = format!("::{reference}");
        let mut found = self.types.iter().filter(|(path, _)| path.ends_with(&suffix));

        match (found.next(), found.next()) {
            (Some((_, symbol)), None) => Some(symbol.clone()),
            _ => None,
        }
    }

    fn candidates(&self, scope: &str, reference: &str) -> Vec<String> {
        let mut out = Vec::new();
        let local = self.scopes.get(scope);
        let (head, rest) = match reference.split_once("::") {
            Some((head, rest)) => (head, Some(rest)),
            None => (reference, None),
        };

        if reference.starts_with("crate::") {
            out.push(reference.to_string());
        }

        if let Some(target) = local.and_then(|s| s.imports.get(head)) {
            let full = rest.map_or_else(|| target.clone(), |rest| format!("{target}::{rest}"));
            out.extend(expand(scope, &full));
        }

        out.extend(expand(scope, reference));

        for glob in local.map(|s| s.globs.as_slice()).unwrap_or_default() {
            out.extend(expand(scope, &join(glob, reference)));
        }

        out
    }
}

impl SymbolProvider for SourceProvider {
    fn declarations(&self) -> &[DeclSymbol] {
        &self.declarations
    }

    fn resolve_type(&self, scope: &str, reference: &str) -> Option<TypeSymbol> {
        let reference = reference.trim();

        self.candidates(scope, reference)
            .iter()
            .find_map(|path| self.types.get(path).cloned())
            .or_else(|| self.unique_suffix(reference))
    }
}

// normalize_module
fn normalize_module(module: &str) -> Result<String, SourceError> {
    let path: syn::Path = syn::parse_str(module.trim())
        .map_err(|_| SourceError::InvalidModule(module.to_string()))?;

    if path.leading_colon.is_some() {
        return Err(SourceError::InvalidModule(module.to_string()));
    }

    Ok(path_to_string(&path))
}

fn join(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}::{name}")
    }
}

fn parent(scope: &str) -> Option<&str> {
    scope.rsplit_once("::").map(|(parent, _)| parent)
}

// expand
// absolute candidates for a path as written inside `scope`
fn expand(scope: &str, path: &str) -> Vec<String> {
    if path == "crate" || path.starts_with("crate::") {
        return vec![path.to_string()];
    }

    if let Some(rest) = path.strip_prefix("self::") {
        return vec![join(scope, rest)];
    }

    if path.starts_with("super::") {
        let mut base = scope;
        let mut rest = path;
        while let Some(tail) = rest.strip_prefix("super::") {
            let Some(up) = parent(base) else {
                return Vec::new();
            };
            base = up;
            rest = tail;
        }

        return vec![join(base, rest)];
    }

    vec![
        join(scope, path),
        format!("crate::{path}"),
        path.to_string(),
    ]
}

fn collect_use(prefix: &str, tree: &UseTree, scope: &mut Scope) {
    match tree {
        UseTree::Path(tree) => collect_use(&join(prefix, &tree.ident.to_string()), &tree.tree, scope),
        UseTree::Name(tree) => {
            let ident = tree.ident.to_string();
            if ident == "self" {
                if let Some(last) = prefix.rsplit("::").next() {
                    scope.imports.insert(last.to_string(), prefix.to_string());
                }
            } else {
                scope.imports.insert(ident.clone(), join(prefix, &ident));
            }
        }
        UseTree::Rename(tree) => {
            let ident = tree.ident.to_string();
            let target = if ident == "self" {
                prefix.to_string()
            } else {
                join(prefix, &ident)
            };

            scope.imports.insert(tree.rename.to_string(), target);
        }
        UseTree::Glob(_) => scope.globs.push(prefix.to_string()),
        UseTree::Group(group) => {
            for tree in &group.items {
                collect_use(prefix, tree, scope);
            }
        }
    }
}

fn derive_names(attr: &Attribute) -> Vec<String> {
    attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        .map(|paths| {
            paths
                .iter()
                .filter_map(|path| path.segments.last().map(|seg| seg.ident.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn repr_attr(attr: &Attribute) -> Option<Repr> {
    if !attr.path().is_ident("repr") {
        return None;
    }

    let metas = attr
        .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
        .ok()?;

    metas
        .iter()
        .filter_map(|meta| meta.path().get_ident())
        .find_map(|ident| Repr::from_ident(&ident.to_string()))
}

fn member_symbol(variant: &Variant, lines: &[&str]) -> MemberSymbol {
    MemberSymbol {
        ident: variant.ident.to_string(),
        unit: matches!(variant.fields, Fields::Unit),
        is_default: variant.attrs.iter().any(|attr| attr.path().is_ident("default")),
        description: variant.attrs.iter().find_map(description_attr),
        documentation: documentation(&variant.attrs),
        comment: leading_comment(variant, lines),
    }
}

fn lit_str(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some(lit.value()),
        _ => None,
    }
}

// description_attr
// #[description = ".."], #[description("..")] or #[strum(message = "..")]
fn description_attr(attr: &Attribute) -> Option<String> {
    let path = attr.path();

    if path.is_ident("description") {
        match &attr.meta {
            Meta::NameValue(meta) => lit_str(&meta.value),
            Meta::List(list) => list.parse_args::<LitStr>().ok().map(|lit| lit.value()),
            Meta::Path(_) => None,
        }
    } else if path.is_ident("strum") {
        let metas = attr
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .ok()?;

        metas.iter().find_map(|meta| match meta {
            Meta::NameValue(meta) if meta.path.is_ident("message") => lit_str(&meta.value),
            _ => None,
        })
    } else {
        None
    }
}

fn documentation(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => lit_str(&meta.value),
            _ => None,
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

// a `//` line that is neither `///` outer doc nor `//!` inner doc
fn is_plain_comment(line: &str) -> bool {
    line.starts_with("//")
        && !line.starts_with("//!")
        && (!line.starts_with("///") || line.starts_with("////"))
}

// leading_comment
// the run of plain comment lines directly above the variant's first token
fn leading_comment(variant: &Variant, lines: &[&str]) -> Option<String> {
    let start = variant.attrs.first().map_or_else(
        || variant.ident.span().start(),
        |attr| attr.pound_token.spans[0].start(),
    );

    // span lines are 1-based
    let mut index = start.line.checked_sub(1)?;

    // the variant must open its line, `enum E { A, B }` has no leading comment
    let opens_line = lines
        .get(index)
        .is_some_and(|line| line.chars().take(start.column).all(char::is_whitespace));
    if !opens_line {
        return None;
    }
    let mut block = Vec::new();

    while index > 0 {
        index -= 1;
        let Some(line) = lines.get(index).map(|line| line.trim()) else {
            break;
        };
        if !is_plain_comment(line) {
            break;
        }
        block.push(line);
    }

    if block.is_empty() {
        return None;
    }
    block.reverse();

    Some(block.join("\n"))
}

///
/// TESTS
///
