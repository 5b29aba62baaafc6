//! One `partial class` file per immutable type.

use frost_codegen::TypeMapper;
use frost_ir::{DefaultValue, FieldType, GeneratedBuilderType, GeneratedType, PrimitiveType};

use super::HEADER;
use crate::{CSharpFile, CSharpTypeMapper, Class, Constructor, FieldDecl, Method, Property};

/// A `<Name>.generated.cs` file holding the class and its nested builder.
pub struct ClassFile<'a> {
    ty: &'a GeneratedType,
    namespace: Option<&'a str>,
    mapper: CSharpTypeMapper,
}

impl<'a> ClassFile<'a> {
    pub fn new(ty: &'a GeneratedType, namespace: Option<&'a str>) -> Self {
        Self {
            ty,
            namespace,
            mapper: CSharpTypeMapper,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.generated.cs", self.ty.file_stem)
    }

    pub fn render(&self) -> String {
        CSharpFile::new(HEADER)
            .namespace(self.namespace)
            .item(self.class())
            .render()
    }

    fn class(&self) -> Class {
        let ty = self.ty;
        let mut class = Class::new(&ty.name).doc_opt(ty.description.as_deref());

        for field in &ty.fields {
            class = class.member(&FieldDecl::readonly(self.mapper.map_type(&field.ty), &field.name));
        }

        class = class.member(&self.empty_constructor());
        if !ty.is_empty() {
            class = class.member(&self.full_constructor());
        }

        class = class.member(
            &Method::new(&ty.empty_factory.name, &ty.name)
                .static_()
                .doc("Creates an instance with every field set to its default.")
                .body_line(format!("return new {}();", ty.name)),
        );

        if let Some(factory) = &ty.full_factory {
            let method = factory.params.iter().fold(
                Method::new(&factory.name, &ty.name)
                    .static_()
                    .doc("Creates an instance from every field, in declaration order."),
                |m, p| m.param(&self.mapper.map_type(&p.ty), &p.name),
            );
            let args: Vec<&str> = factory.params.iter().map(|p| p.name.as_str()).collect();
            class = class.member(&method.body_line(format!(
                "return new {}({});",
                ty.name,
                args.join(", ")
            )));
        }

        // Each property is followed by its wither
        for ((accessor, wither), field) in ty.accessors.iter().zip(&ty.withers).zip(&ty.fields) {
            let mapped = self.mapper.map_type(&accessor.ty);
            class = class.member(
                &Property::new(&mapped, &accessor.name, &accessor.field)
                    .doc_opt(field.description.as_deref()),
            );

            let args: Vec<String> = ty
                .accessors
                .iter()
                .map(|a| {
                    if a.field == wither.field {
                        "value".to_string()
                    } else {
                        format!("this.{}", a.name)
                    }
                })
                .collect();
            class = class.member(
                &Method::new(&wither.name, &ty.name)
                    .param(&mapped, "value")
                    .body_line(format!("return new {}({});", ty.name, args.join(", "))),
            );
        }

        if let Some(updater) = &ty.updater {
            let method = updater.params.iter().fold(
                Method::new(&updater.name, &ty.name)
                    .doc("Returns a copy with every supplied field replaced."),
                |m, p| {
                    let optional = format!("Optional<{}>", self.mapper.map_type(&p.ty));
                    m.raw_param(format!("{} {} = default({})", optional, p.name, optional))
                },
            );
            let args: Vec<String> = updater
                .params
                .iter()
                .zip(&ty.accessors)
                .map(|(p, a)| format!("{0}.IsDefined ? {0}.Value : this.{1}", p.name, a.name))
                .collect();
            class = class.member(&method.body_line(format!(
                "return new {}({});",
                ty.name,
                args.join(", ")
            )));
        }

        if let Some(builder) = &ty.builder {
            class = class
                .member(
                    &Method::new(&builder.to_builder, &builder.name)
                        .doc("Creates a builder seeded with this instance.")
                        .body_line(format!("return new {}(this);", builder.name)),
                )
                .member(
                    &Method::new(&builder.create_builder, &builder.name)
                        .static_()
                        .doc("Creates a builder with every field set to its default.")
                        .body_line(format!("return new {}(new {}());", builder.name, ty.name)),
                )
                .member(&self.builder_class(builder));
        }

        class
    }

    fn empty_constructor(&self) -> Constructor {
        let ty = self.ty;
        let ctor = Constructor::new(&ty.name)
            .doc(format!("Initializes a new instance of the {} class.", ty.name));

        ty.fields.iter().fold(ctor, |ctor, field| {
            match default_expr(&self.mapper, &field.ty, field.default.as_ref()) {
                Some(expr) => ctor.body_line(format!("this.{} = {};", field.name, expr)),
                None => ctor,
            }
        })
    }

    fn full_constructor(&self) -> Constructor {
        let ty = self.ty;
        ty.fields.iter().fold(
            Constructor::new(&ty.name)
                .doc(format!("Initializes a new instance of the {} class.", ty.name)),
            |ctor, field| {
                ctor.param(&self.mapper.map_type(&field.ty), &field.param)
                    .body_line(format!("this.{} = {};", field.name, field.param))
            },
        )
    }

    fn builder_class(&self, builder: &GeneratedBuilderType) -> Class {
        let ty = self.ty;
        let mut class = Class::new(&builder.name);

        for field in &ty.fields {
            class = class.member(&FieldDecl::mutable(self.mapper.map_type(&field.ty), &field.name));
        }

        let seed = ty.fields.iter().zip(&ty.accessors).fold(
            Constructor::new(&builder.name).internal().param(&ty.name, "immutable"),
            |ctor, (field, accessor)| {
                ctor.body_line(format!("this.{} = immutable.{};", field.name, accessor.name))
            },
        );
        class = class.member(&seed);

        for property in &builder.properties {
            class = class.member(
                &Property::new(self.mapper.map_type(&property.ty), &property.getter, &property.field)
                    .with_setter(),
            );
        }

        let args: Vec<String> = ty.fields.iter().map(|f| format!("this.{}", f.name)).collect();
        class.member(
            &Method::new(&builder.to_immutable, &ty.name)
                .doc(format!("Creates a {} from the current values.", ty.name))
                .body_line(format!("return new {}({});", ty.name, args.join(", "))),
        )
    }
}

/// Initializer for a field in the parameterless constructor.
///
/// `None` leaves the field at its CLR default.
fn default_expr(
    mapper: &CSharpTypeMapper,
    ty: &FieldType,
    default: Option<&DefaultValue>,
) -> Option<String> {
    match (ty, default) {
        (FieldType::Optional(inner), Some(value)) => default_expr(mapper, inner, Some(value)),
        (FieldType::Optional(_), None) => None,
        (FieldType::Primitive(p), Some(value)) => Some(literal(*p, value)),
        (FieldType::Primitive(PrimitiveType::String), None) => Some("\"\"".to_string()),
        (FieldType::Primitive(_), None) => None,
        (FieldType::List(_) | FieldType::Map(..), _) => Some(format!("{}.Empty", mapper.map_type(ty))),
        (FieldType::Named(name), _) => Some(format!("{}.Create()", mapper.map_named(name))),
    }
}

fn literal(p: PrimitiveType, value: &DefaultValue) -> String {
    match (p, value) {
        (PrimitiveType::String, DefaultValue::String(s)) => quote(s, '"'),
        (PrimitiveType::Char, DefaultValue::String(s)) => quote(s, '\''),
        (PrimitiveType::Long, DefaultValue::Int(i)) => format!("{}L", i),
        (PrimitiveType::Float, DefaultValue::Int(i)) => format!("{}F", i),
        (PrimitiveType::Double, DefaultValue::Int(i)) => format!("{}D", i),
        (PrimitiveType::Float | PrimitiveType::Double, DefaultValue::Float(f)) => {
            float_literal(p, *f)
        }
        (_, DefaultValue::Int(i)) => i.to_string(),
        (_, DefaultValue::Bool(b)) => b.to_string(),
        // Mismatched kinds are rejected during expansion
        _ => format!("default({})", CSharpTypeMapper.map_primitive(p)),
    }
}

fn float_literal(p: PrimitiveType, f: f64) -> String {
    let (ty, suffix) = if p == PrimitiveType::Float {
        ("System.Single", "F")
    } else {
        ("System.Double", "D")
    };
    if f.is_nan() {
        format!("{}.NaN", ty)
    } else if f.is_infinite() {
        let name = if f > 0.0 { "PositiveInfinity" } else { "NegativeInfinity" };
        format!("{}.{}", ty, name)
    } else {
        format!("{:?}{}", f, suffix)
    }
}

/// Quote a string or char literal, escaping as C# requires.
fn quote(s: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> FieldType {
        s.parse().unwrap()
    }

    fn default_of(ty: &str, default: Option<DefaultValue>) -> Option<String> {
        default_expr(&CSharpTypeMapper, &parse(ty), default.as_ref())
    }

    #[test]
    fn test_clr_defaults_are_left_alone() {
        assert_eq!(default_of("int", None), None);
        assert_eq!(default_of("bool", None), None);
        assert_eq!(default_of("Fruit?", None), None);
    }

    #[test]
    fn test_reference_defaults() {
        assert_eq!(default_of("string", None).as_deref(), Some("\"\""));
        assert_eq!(
            default_of("list<int>", None).as_deref(),
            Some("System.Collections.Immutable.ImmutableList<System.Int32>.Empty")
        );
        assert_eq!(default_of("fruit", None).as_deref(), Some("Fruit.Create()"));
    }

    #[test]
    fn test_declared_defaults() {
        assert_eq!(
            default_of("long", Some(DefaultValue::Int(5))).as_deref(),
            Some("5L")
        );
        assert_eq!(
            default_of("float", Some(DefaultValue::Int(2))).as_deref(),
            Some("2F")
        );
        assert_eq!(
            default_of("double?", Some(DefaultValue::Float(2.5))).as_deref(),
            Some("2.5D")
        );
        assert_eq!(
            default_of("double", Some(DefaultValue::Float(f64::NEG_INFINITY))).as_deref(),
            Some("System.Double.NegativeInfinity")
        );
        assert_eq!(
            default_of("bool", Some(DefaultValue::Bool(true))).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_quoted_literals() {
        assert_eq!(
            default_of("string", Some(DefaultValue::String("say \"hi\"\n".into()))).as_deref(),
            Some(r#""say \"hi\"\n""#)
        );
        assert_eq!(
            default_of("char", Some(DefaultValue::String("'".into()))).as_deref(),
            Some(r"'\''")
        );
    }
}
