use frost_ir::GeneratedType;

use super::GENERATED_HEADER;
use crate::{RUST_NAMING, RawCode, RustFile};

/// The `mod.rs` that declares every type module and re-exports its types.
pub struct GeneratedMod<'a> {
    types: &'a [GeneratedType],
}

impl<'a> GeneratedMod<'a> {
    pub fn new(types: &'a [GeneratedType]) -> Self {
        Self { types }
    }

    pub fn file_name(&self) -> &'static str {
        "mod.rs"
    }

    pub fn render(&self) -> String {
        if self.types.is_empty() {
            return RustFile::new(GENERATED_HEADER).render();
        }

        let modules = self
            .types
            .iter()
            .map(|ty| format!("mod {};", RUST_NAMING.safe_name(&ty.file_stem)));

        let exports = self.types.iter().map(|ty| {
            let module = RUST_NAMING.safe_name(&ty.file_stem);
            match &ty.builder {
                Some(builder) => format!("pub use {}::{{{}, {}}};", module, ty.name, builder.name),
                None => format!("pub use {}::{};", module, ty.name),
            }
        });

        RustFile::new(GENERATED_HEADER)
            .item(RawCode::lines(modules))
            .item(RawCode::lines(exports))
            .render()
    }
}
