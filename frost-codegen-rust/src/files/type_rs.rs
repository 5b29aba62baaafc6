//! One Rust module per immutable type.

use frost_codegen::{TypeMapper, generation::ImportCollector};
use frost_ir::{BackingField, DefaultValue, FieldType, GeneratedBuilderType, GeneratedType, PrimitiveType};

use super::GENERATED_HEADER;
use crate::{
    Field, Fn, Impl, Param, RUST_NAMING, Receiver, RustFile, RustTypeMapper, Struct, StructLiteral,
};

/// Parameter count above which clippy's `too_many_arguments` fires.
const CLIPPY_MAX_ARGS: usize = 7;

const VALUE_DERIVES: [&str; 3] = ["Debug", "Clone", "PartialEq"];

/// A `<type>.rs` file holding the immutable type and its builder.
pub struct TypeRs<'a> {
    ty: &'a GeneratedType,
    mapper: RustTypeMapper,
}

impl<'a> TypeRs<'a> {
    pub fn new(ty: &'a GeneratedType) -> Self {
        Self {
            ty,
            mapper: RustTypeMapper,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.rs", self.ty.file_stem)
    }

    pub fn render(&self) -> String {
        let ty = self.ty;
        let mut file = RustFile::new(GENERATED_HEADER)
            .imports(&self.imports())
            .item(self.type_struct())
            .item(self.type_impl())
            .item(default_impl(
                &ty.name,
                format!("Self::{}()", ty.empty_factory.name),
            ));

        if let Some(builder) = &ty.builder {
            file = file
                .item(self.builder_struct(builder))
                .item(self.builder_impl(builder))
                .item(default_impl(
                    &builder.name,
                    format!("{}::{}()", ty.name, builder.create_builder),
                ));
        }

        file.render()
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();

        if self.ty.fields.iter().any(|f| uses_map(&f.ty)) {
            imports.add("std::collections", "BTreeMap");
        }

        for field in &self.ty.fields {
            for name in field.ty.named_refs() {
                let target = self.mapper.map_named(name);
                if target != self.ty.name {
                    imports.add("super", &target);
                }
            }
        }

        imports
    }

    fn type_struct(&self) -> Struct {
        self.ty.fields.iter().fold(
            Struct::new(&self.ty.name)
                .doc_opt(self.ty.description.as_deref())
                .derives(VALUE_DERIVES),
            |s, f| {
                s.field(
                    Field::private(&f.name, self.mapper.map_type(&f.ty))
                        .doc_opt(f.description.as_deref()),
                )
            },
        )
    }

    fn type_impl(&self) -> Impl {
        let ty = self.ty;
        let mut methods = vec![self.empty_factory()];

        if let Some(factory) = &ty.full_factory {
            let literal = ty
                .fields
                .iter()
                .fold(StructLiteral::new("Self"), |lit, f| lit.field(&f.name, &f.param));

            let mut new = Fn::new(&factory.name)
                .doc("Creates a value from every field, in declaration order.")
                .params(
                    factory
                        .params
                        .iter()
                        .map(|p| Param::new(&p.name, self.mapper.map_type(&p.ty))),
                )
                .returns("Self")
                .body_node(&literal);
            if factory.params.len() > CLIPPY_MAX_ARGS {
                new = new.attr("allow(clippy::too_many_arguments)");
            }
            methods.push(new);
        }

        for (accessor, field) in ty.accessors.iter().zip(&ty.fields) {
            methods.push(
                Fn::new(&accessor.name)
                    .doc_opt(field.description.as_deref())
                    .receiver(Receiver::Ref)
                    .returns(self.mapper.accessor_type(&accessor.ty))
                    .body_line(self.mapper.accessor_expr(&accessor.ty, &accessor.field)),
            );
        }

        for (wither, field) in ty.withers.iter().zip(&ty.fields) {
            let literal = ty.fields.iter().fold(StructLiteral::new("Self"), |lit, f| {
                if f.name == wither.field {
                    lit.field(&f.name, "value")
                } else {
                    lit.field(&f.name, self.mapper.copy_expr(&f.ty, "self", &f.name))
                }
            });

            methods.push(
                Fn::new(&wither.name)
                    .doc(format!("Returns a copy with `{}` replaced.", field.source))
                    .receiver(Receiver::Ref)
                    .param(Param::new("value", self.mapper.map_type(&wither.ty)))
                    .returns("Self")
                    .body_node(&literal),
            );
        }

        if let Some(updater) = &ty.updater {
            let literal = ty
                .fields
                .iter()
                .fold(StructLiteral::new("Self"), |lit, f| {
                    let fallback = if RustTypeMapper::is_copy(&f.ty) {
                        format!("{}.unwrap_or(self.{})", f.param, f.name)
                    } else {
                        format!(
                            "{}.unwrap_or_else(|| {})",
                            f.param,
                            self.mapper.copy_expr(&f.ty, "self", &f.name)
                        )
                    };
                    lit.field(&f.name, fallback)
                });

            let mut with = Fn::new(&updater.name)
                .doc("Returns a copy with every supplied field replaced.")
                .receiver(Receiver::Ref)
                .params(updater.params.iter().map(|p| {
                    Param::new(&p.name, format!("Option<{}>", self.mapper.map_type(&p.ty)))
                }))
                .returns("Self")
                .body_node(&literal);
            if updater.params.len() + 1 > CLIPPY_MAX_ARGS {
                with = with.attr("allow(clippy::too_many_arguments)");
            }
            methods.push(with);
        }

        if let Some(builder) = &ty.builder {
            let literal = ty
                .fields
                .iter()
                .fold(StructLiteral::new(&builder.name), |lit, f| {
                    lit.field(&f.name, self.mapper.copy_expr(&f.ty, "self", &f.name))
                });

            methods.push(
                Fn::new(&builder.to_builder)
                    .doc("Creates a builder seeded with this value.")
                    .receiver(Receiver::Ref)
                    .returns(&builder.name)
                    .body_node(&literal),
            );
            methods.push(
                Fn::new(&builder.create_builder)
                    .doc("Creates a builder with every field set to its default.")
                    .returns(&builder.name)
                    .body_line(format!(
                        "Self::{}().{}()",
                        ty.empty_factory.name, builder.to_builder
                    )),
            );
        }

        Impl::new(&ty.name).methods(methods)
    }

    fn empty_factory(&self) -> Fn {
        let literal = self
            .ty
            .fields
            .iter()
            .fold(StructLiteral::new("Self"), |lit, f| {
                lit.field(&f.name, self.default_expr(f))
            });

        Fn::new(&self.ty.empty_factory.name)
            .doc("Creates a value with every field set to its default.")
            .returns("Self")
            .body_node(&literal)
    }

    fn builder_struct(&self, builder: &GeneratedBuilderType) -> Struct {
        let doc = format!("Mutable builder for [`{}`].", self.ty.name);
        self.ty.fields.iter().fold(
            Struct::new(&builder.name)
                .doc_opt(Some(&doc))
                .derives(VALUE_DERIVES),
            |s, f| s.field(Field::private(&f.name, self.mapper.map_type(&f.ty))),
        )
    }

    fn builder_impl(&self, builder: &GeneratedBuilderType) -> Impl {
        let mut methods = Vec::new();

        for property in &builder.properties {
            methods.push(
                Fn::new(&property.getter)
                    .receiver(Receiver::Ref)
                    .returns(self.mapper.accessor_type(&property.ty))
                    .body_line(self.mapper.accessor_expr(&property.ty, &property.field)),
            );
            methods.push(
                Fn::new(&property.setter)
                    .receiver(Receiver::Mut)
                    .param(Param::new("value", self.mapper.map_type(&property.ty)))
                    .returns("&mut Self")
                    .body_line(format!("self.{} = value;", property.field))
                    .body_line("self"),
            );
        }

        let snapshot = match &self.ty.full_factory {
            Some(factory) => {
                let args: Vec<String> = self
                    .ty
                    .fields
                    .iter()
                    .map(|f| self.mapper.copy_expr(&f.ty, "self", &f.name))
                    .collect();
                format!("{}::{}({})", self.ty.name, factory.name, args.join(", "))
            }
            None => format!("{}::{}()", self.ty.name, self.ty.empty_factory.name),
        };

        methods.push(
            Fn::new(&builder.to_immutable)
                .doc(format!("Creates a [`{}`] from the current values.", self.ty.name))
                .receiver(Receiver::Ref)
                .returns(&self.ty.name)
                .body_line(snapshot),
        );

        Impl::new(&builder.name).methods(methods)
    }

    fn default_expr(&self, field: &BackingField) -> String {
        default_expr(&self.mapper, &field.ty, field.default.as_ref())
    }
}

fn default_impl(type_name: &str, body: String) -> Impl {
    Impl::of_trait("Default", type_name).method(
        Fn::new("default")
            .private()
            .returns("Self")
            .body_line(body),
    )
}

fn uses_map(ty: &FieldType) -> bool {
    match ty {
        FieldType::Map(..) => true,
        FieldType::List(inner) | FieldType::Optional(inner) => uses_map(inner),
        FieldType::Primitive(_) | FieldType::Named(_) => false,
    }
}

/// Expression for the value a field takes in the zero-parameter factory.
fn default_expr(mapper: &RustTypeMapper, ty: &FieldType, default: Option<&DefaultValue>) -> String {
    match (ty, default) {
        (FieldType::Optional(inner), Some(value)) => {
            format!("Some({})", default_expr(mapper, inner, Some(value)))
        }
        (FieldType::Optional(_), None) => "None".to_string(),
        (FieldType::Primitive(p), Some(value)) => literal(*p, value),
        (FieldType::Primitive(p), None) => zero(*p).to_string(),
        (FieldType::List(_), _) => "Vec::new()".to_string(),
        (FieldType::Map(..), _) => "BTreeMap::new()".to_string(),
        (FieldType::Named(name), _) => {
            format!("{}::{}()", mapper.map_named(name), RUST_NAMING.empty_factory)
        }
    }
}

fn zero(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::String => "String::new()",
        PrimitiveType::Int | PrimitiveType::Long | PrimitiveType::Byte => "0",
        PrimitiveType::Float | PrimitiveType::Double => "0.0",
        PrimitiveType::Bool => "false",
        PrimitiveType::Char => "'\\0'",
    }
}

fn literal(p: PrimitiveType, value: &DefaultValue) -> String {
    match (p, value) {
        (PrimitiveType::String, DefaultValue::String(s)) => format!("String::from({:?})", s),
        (PrimitiveType::Char, DefaultValue::String(s)) => match s.chars().next() {
            Some(c) => format!("{:?}", c),
            None => zero(p).to_string(),
        },
        (PrimitiveType::Float | PrimitiveType::Double, DefaultValue::Int(i)) => format!("{}.0", i),
        (PrimitiveType::Float | PrimitiveType::Double, DefaultValue::Float(f)) => {
            float_literal(p, *f)
        }
        (_, DefaultValue::Int(i)) => i.to_string(),
        (PrimitiveType::Bool, DefaultValue::Bool(b)) => b.to_string(),
        _ => zero(p).to_string(),
    }
}

fn float_literal(p: PrimitiveType, f: f64) -> String {
    let ty = if p == PrimitiveType::Float { "f32" } else { "f64" };
    if f.is_nan() {
        format!("{}::NAN", ty)
    } else if f.is_infinite() {
        let name = if f > 0.0 { "INFINITY" } else { "NEG_INFINITY" };
        format!("{}::{}", ty, name)
    } else {
        format!("{:?}", f)
    }
}
