//! Per-target wiring: which naming convention expands the types and which
//! backend renders them.

use frost_codegen::{
    LanguageCodegen, NamingConvention,
    pipeline::{CompilationContext, Pipeline},
};
use frost_manifest::Language;

#[derive(Debug, Clone, Copy)]
pub struct LanguageSupport {
    pub language: Language,
}

impl From<Language> for LanguageSupport {
    fn from(language: Language) -> Self {
        Self { language }
    }
}

impl LanguageSupport {
    pub fn naming(&self) -> NamingConvention {
        match self.language {
            Language::Rust => frost_codegen_rust::RUST_NAMING,
            Language::CSharp => frost_codegen_csharp::CSHARP_NAMING,
        }
    }

    /// Pipeline expanding every declared type under this target's naming.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.naming())
    }

    /// Backend for a context the pipeline from [`Self::pipeline`] has run on.
    pub fn generator(&self, ctx: CompilationContext) -> Box<dyn LanguageCodegen> {
        match self.language {
            Language::Rust => Box::new(frost_codegen_rust::Generator::from_context(ctx)),
            Language::CSharp => Box::new(frost_codegen_csharp::Generator::from_context(ctx)),
        }
    }
}
