//! Go interface declaration.

use kitgen_codegen::{
    CodeFragment, Renderable,
    builder::{InterfaceSpec, MethodSpec, ParamSpec, SignatureRenderer, TypeMapper},
};

use crate::GoTypeMapper;

/// Renders an [`InterfaceSpec`] as a Go `type ... interface` declaration.
#[derive(Debug, Clone, Copy)]
pub struct GoInterface<'a> {
    spec: &'a InterfaceSpec,
    mapper: &'a GoTypeMapper,
}

impl<'a> GoInterface<'a> {
    pub fn new(spec: &'a InterfaceSpec, mapper: &'a GoTypeMapper) -> Self {
        Self { spec, mapper }
    }
}

impl SignatureRenderer for GoInterface<'_> {
    fn render_method(&self, spec: &MethodSpec) -> String {
        let params: Vec<_> = spec.params.iter().map(|p| self.render_param(p)).collect();
        let mut out = format!("{}({})", spec.name, params.join(", "));
        if !spec.results.is_empty() {
            let results: Vec<_> = spec.results.iter().map(|r| self.render_param(r)).collect();
            out.push_str(&format!(" ({})", results.join(", ")));
        }
        out
    }

    fn render_param(&self, spec: &ParamSpec) -> String {
        format!("{} {}", spec.name, self.mapper.render_type(&spec.ty))
    }
}

impl Renderable for GoInterface<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.spec.doc {
            fragments.push(CodeFragment::comment(doc.clone()));
        }

        if self.spec.methods.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "type {} interface{{}}",
                self.spec.name
            )));
            return fragments;
        }

        let mut body = Vec::new();
        for method in &self.spec.methods {
            if let Some(doc) = &method.doc {
                body.push(CodeFragment::comment(doc.clone()));
            }
            body.push(CodeFragment::line(self.render_method(method)));
        }
        fragments.push(CodeFragment::block(
            format!("type {} interface {{", self.spec.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
