//! The field-to-immutable-type transform.
//!
//! [`Transformer::generate`] expands a [`TypeSpec`] into a [`GeneratedType`]:
//! one backing field, accessor and wither per declared field, the two
//! factories, the multi-field updater and, on request, a builder. Every
//! name is computed through a [`NamingConvention`], so the result is ready
//! for a backend to render.
//!
//! The transform is all-or-nothing. Input is checked in a fixed order
//! (type name, duplicate fields, field names, field types, generated member
//! names) and the first problem is returned before anything is built.

mod error;

use std::collections::{HashMap, HashSet};

use frost_core::validate_identifier;
use frost_ir::{
    Accessor, BackingField, BuilderProperty, Factory, FieldType, GeneratedBuilderType,
    GeneratedType, Param, SchemaIR, TypeSpec, Updater, Wither,
};
use tracing::debug;

pub use error::TransformError;

use crate::NamingConvention;

type Result<T> = std::result::Result<T, TransformError>;

/// Expands type declarations for one target language.
///
/// A transformer holds only borrowed, immutable data and may be shared
/// across threads.
///
/// # Example
///
/// ```ignore
/// let transformer = Transformer::new(&RUST_NAMING).with_schema(&schema);
/// for spec in &schema.types {
///     let generated = transformer.generate(spec)?;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'a> {
    naming: &'a NamingConvention,
    schema: Option<&'a SchemaIR>,
}

impl<'a> Transformer<'a> {
    pub fn new(naming: &'a NamingConvention) -> Self {
        Self {
            naming,
            schema: None,
        }
    }

    /// Resolve named field types against `schema`.
    ///
    /// Without a schema, references to other types are accepted as-is and
    /// only a type's references to itself are checked.
    pub fn with_schema(mut self, schema: &'a SchemaIR) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn naming(&self) -> &NamingConvention {
        self.naming
    }

    /// Expand a declared type into its generated members.
    #[tracing::instrument(skip_all, fields(type_name = %spec.name, fields = spec.fields.len()))]
    pub fn generate(&self, spec: &TypeSpec) -> Result<GeneratedType> {
        self.check_type_name(spec)?;
        self.check_duplicates(spec)?;
        self.check_field_names(spec)?;
        self.check_field_types(spec)?;

        let generated = self.expand(spec);
        self.check_members(spec, &generated)?;

        debug!(
            name = %generated.name,
            builder = generated.builder.is_some(),
            "expanded type"
        );
        Ok(generated)
    }

    fn check_type_name(&self, spec: &TypeSpec) -> Result<()> {
        let invalid = |name: &str, reason: String| TransformError::InvalidIdentifier {
            type_name: spec.name.clone(),
            field: None,
            name: name.to_string(),
            reason,
        };

        if let Some(reason) = validate_identifier(&spec.name) {
            return Err(invalid(&spec.name, reason.to_string()));
        }

        let name = (self.naming.type_case)(&spec.name);
        if self.naming.is_unescapable(&name) {
            return Err(invalid(&name, self.unusable(&name)));
        }
        // Some targets name a module after the file
        let stem = (self.naming.file_case)(&spec.name);
        if self.naming.is_unescapable(&stem) {
            return Err(invalid(&stem, self.unusable(&stem)));
        }
        if self.naming.reserved_type_names.contains(&name.as_str()) {
            return Err(invalid(
                &name,
                format!(
                    "'{}' would shadow a type the generated {} code relies on",
                    name, self.naming.language
                ),
            ));
        }

        Ok(())
    }

    /// Fields must stay distinct after every name derivation, not just as declared.
    fn check_duplicates(&self, spec: &TypeSpec) -> Result<()> {
        let derivations: [fn(&NamingConvention, &str) -> String; 3] = [
            NamingConvention::field_name,
            NamingConvention::param_name,
            NamingConvention::member_name,
        ];

        let mut seen: HashMap<(usize, String), &str> = HashMap::new();
        for field in &spec.fields {
            let keys: Vec<(usize, String)> = std::iter::once(field.name.clone())
                .chain(derivations.iter().map(|derive| derive(self.naming, &field.name)))
                .enumerate()
                .collect();

            if let Some(first) = keys.iter().find_map(|key| seen.get(key)) {
                return Err(TransformError::DuplicateField {
                    type_name: spec.name.clone(),
                    field: field.name.clone(),
                    first: first.to_string(),
                });
            }

            for key in keys {
                seen.insert(key, &field.name);
            }
        }

        Ok(())
    }

    fn check_field_names(&self, spec: &TypeSpec) -> Result<()> {
        for field in &spec.fields {
            let invalid = |name: &str, reason: String| TransformError::InvalidIdentifier {
                type_name: spec.name.clone(),
                field: Some(field.name.clone()),
                name: name.to_string(),
                reason,
            };

            if let Some(reason) = validate_identifier(&field.name) {
                return Err(invalid(&field.name, reason.to_string()));
            }

            for case in [
                self.naming.field_case,
                self.naming.param_case,
                self.naming.member_case,
            ] {
                let cased = case(&field.name);
                if self.naming.is_unescapable(&cased) {
                    return Err(invalid(&cased, self.unusable(&cased)));
                }
            }
        }

        Ok(())
    }

    fn check_field_types(&self, spec: &TypeSpec) -> Result<()> {
        for field in &spec.fields {
            let unsupported = |reason: String| TransformError::UnsupportedFieldType {
                type_name: spec.name.clone(),
                field: field.name.clone(),
                ty: field.ty.to_string(),
                reason,
            };

            self.check_type(spec, &field.ty, false)
                .map_err(unsupported)?;

            if let Some(default) = &field.default {
                default.check_fits(&field.ty).map_err(unsupported)?;
            }
        }

        Ok(())
    }

    /// `indirect` is true once the type is behind a list or map, where a
    /// reference back to the containing type has a finite size.
    fn check_type(
        &self,
        spec: &TypeSpec,
        ty: &FieldType,
        indirect: bool,
    ) -> std::result::Result<(), String> {
        match ty {
            FieldType::Primitive(_) => Ok(()),
            FieldType::List(element) => self.check_type(spec, element, true),
            FieldType::Optional(inner) => {
                if matches!(inner.as_ref(), FieldType::Optional(_)) {
                    return Err("nested optionals are not supported".to_string());
                }
                self.check_type(spec, inner, indirect)
            }
            FieldType::Map(key, value) => {
                match key.as_primitive() {
                    Some(p) if !p.is_floating() => {}
                    _ => {
                        return Err(format!(
                            "map keys must be a non-floating primitive, found '{}'",
                            key
                        ));
                    }
                }
                self.check_type(spec, value, true)
            }
            FieldType::Named(name) => {
                if let Some(schema) = self.schema
                    && name != &spec.name
                    && schema.get(name).is_none()
                {
                    return Err(format!("unknown type '{}'", name));
                }
                if !indirect && self.contains_by_value(name, &spec.name) {
                    return Err(format!(
                        "'{}' would contain itself by value; hold it in a list or map instead",
                        spec.name
                    ));
                }
                Ok(())
            }
        }
    }

    /// Whether a value of type `name` holds a `target` without indirection.
    fn contains_by_value(&self, name: &str, target: &str) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![name];

        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(spec) = self.schema.and_then(|s| s.get(current)) {
                stack.extend(spec.fields.iter().filter_map(|f| by_value_ref(&f.ty)));
            }
        }

        false
    }

    fn unusable(&self, name: &str) -> String {
        format!(
            "'{}' cannot be used as an identifier in {}, even escaped",
            name, self.naming.language
        )
    }

    fn expand(&self, spec: &TypeSpec) -> GeneratedType {
        let naming = self.naming;
        let name = naming.type_name(&spec.name);

        let fields: Vec<BackingField> = spec
            .fields
            .iter()
            .map(|f| BackingField {
                name: naming.field_name(&f.name),
                source: f.name.clone(),
                param: naming.param_name(&f.name),
                ty: f.ty.clone(),
                default: f.default.clone(),
                description: f.description.clone(),
            })
            .collect();

        let accessors = spec
            .fields
            .iter()
            .zip(&fields)
            .map(|(f, field)| Accessor {
                name: naming.member_name(&f.name),
                field: field.name.clone(),
                ty: f.ty.clone(),
            })
            .collect();

        let withers = spec
            .fields
            .iter()
            .zip(&fields)
            .map(|(f, field)| Wither {
                name: naming.wither_name(&f.name),
                field: field.name.clone(),
                ty: f.ty.clone(),
            })
            .collect();

        let params: Vec<Param> = fields
            .iter()
            .map(|f| Param {
                name: f.param.clone(),
                ty: f.ty.clone(),
            })
            .collect();

        let (full_factory, updater) = if params.is_empty() {
            (None, None)
        } else {
            (
                Some(Factory {
                    name: naming.full_factory.to_string(),
                    params: params.clone(),
                }),
                Some(Updater {
                    name: naming.updater_name(),
                    params,
                }),
            )
        };

        let builder = spec.has_builder.then(|| GeneratedBuilderType {
            name: naming.builder_type_name(&name),
            nested: naming.nested_builder,
            properties: spec
                .fields
                .iter()
                .zip(&fields)
                .map(|(f, field)| BuilderProperty {
                    getter: naming.member_name(&f.name),
                    setter: naming.setter_name(&f.name),
                    field: field.name.clone(),
                    ty: f.ty.clone(),
                })
                .collect(),
            to_immutable: naming.member_name("to_immutable"),
            create_builder: naming.member_name("create_builder"),
            to_builder: naming.member_name("to_builder"),
        });

        GeneratedType {
            name,
            source: spec.name.clone(),
            file_stem: naming.file_name(&spec.name),
            description: spec.description.clone(),
            fields,
            accessors,
            withers,
            empty_factory: Factory {
                name: naming.empty_factory.to_string(),
                params: Vec::new(),
            },
            full_factory,
            updater,
            builder,
        }
    }

    /// Generated members sharing a scope must have distinct names.
    fn check_members(&self, spec: &TypeSpec, generated: &GeneratedType) -> Result<()> {
        let share_fields = self.naming.fields_share_member_scope;

        let mut scope = MemberScope::new(&spec.name);
        scope.add(&generated.name, None, "the type itself")?;
        scope.add(&generated.empty_factory.name, None, "the empty factory")?;
        if let Some(full) = &generated.full_factory
            && full.name != generated.empty_factory.name
        {
            scope.add(&full.name, None, "the full factory")?;
        }
        if let Some(updater) = &generated.updater {
            scope.add(&updater.name, None, "the updater")?;
        }
        if let Some(builder) = &generated.builder {
            if builder.nested {
                scope.add(&builder.name, None, "the builder type")?;
            }
            scope.add(&builder.to_builder, None, "the builder conversion")?;
            scope.add(&builder.create_builder, None, "the builder factory")?;
        }

        for (i, decl) in spec.fields.iter().enumerate() {
            let source = Some(decl.name.as_str());
            if share_fields {
                scope.add(&generated.fields[i].name, source, "backing field")?;
            }
            scope.add(&generated.accessors[i].name, source, "accessor")?;
            scope.add(&generated.withers[i].name, source, "wither")?;
        }

        let Some(builder) = &generated.builder else {
            return Ok(());
        };

        let mut scope = MemberScope::new(&spec.name);
        if builder.nested {
            scope.add(&builder.name, None, "the builder type")?;
        }
        scope.add(&builder.to_immutable, None, "the immutable conversion")?;
        for (i, (decl, property)) in spec.fields.iter().zip(&builder.properties).enumerate() {
            let source = Some(decl.name.as_str());
            if share_fields {
                scope.add(&generated.fields[i].name, source, "builder field")?;
            }
            scope.add(&property.getter, source, "builder getter")?;
            if property.setter != property.getter {
                scope.add(&property.setter, source, "builder setter")?;
            }
        }

        if !builder.nested
            && let Some(schema) = self.schema
            && let Some(clash) = schema
                .types
                .iter()
                .find(|t| t.name != spec.name && self.naming.type_name(&t.name) == builder.name)
        {
            return Err(TransformError::InvalidIdentifier {
                type_name: spec.name.clone(),
                field: None,
                name: builder.name.clone(),
                reason: format!("builder type collides with declared type '{}'", clash.name),
            });
        }

        Ok(())
    }
}

/// Named type held directly or through an optional.
fn by_value_ref(ty: &FieldType) -> Option<&str> {
    match ty {
        FieldType::Named(name) => Some(name.as_str()),
        FieldType::Optional(inner) => by_value_ref(inner),
        _ => None,
    }
}

struct Member<'s> {
    source: Option<&'s str>,
    role: &'static str,
}

/// Names already taken in one generated scope.
struct MemberScope<'s> {
    type_name: &'s str,
    members: HashMap<&'s str, Member<'s>>,
}

impl<'s> MemberScope<'s> {
    fn new(type_name: &'s str) -> Self {
        Self {
            type_name,
            members: HashMap::new(),
        }
    }

    fn add(&mut self, name: &'s str, source: Option<&'s str>, role: &'static str) -> Result<()> {
        if let Some(existing) = self.members.get(name) {
            return Err(TransformError::InvalidIdentifier {
                type_name: self.type_name.to_string(),
                field: source.or(existing.source).map(str::to_string),
                name: name.to_string(),
                reason: format!(
                    "{} collides with {}",
                    describe(role, source),
                    describe(existing.role, existing.source)
                ),
            });
        }

        self.members.insert(name, Member { source, role });
        Ok(())
    }
}

fn describe(role: &str, source: Option<&str>) -> String {
    match source {
        Some(field) => format!("{} of '{}'", role, field),
        None => role.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use frost_ir::{DefaultValue, FieldSpec, PrimitiveType, ProjectMeta};

    use super::*;
    use crate::testing::{TEST_NAMING, TEST_PASCAL_NAMING, basket_spec, fruit_spec};

    fn generate(spec: &TypeSpec) -> Result<GeneratedType> {
        Transformer::new(&TEST_NAMING).generate(spec)
    }

    fn schema(types: Vec<TypeSpec>) -> SchemaIR {
        SchemaIR {
            meta: ProjectMeta {
                name: "orchard".into(),
                namespace: None,
            },
            types,
        }
    }

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<&str> {
        items.iter().map(name).collect()
    }

    #[test]
    fn test_fruit_members() {
        let fruit = generate(&fruit_spec()).unwrap();

        assert_eq!(fruit.name, "Fruit");
        assert_eq!(fruit.file_stem, "fruit");
        assert_eq!(
            names(&fruit.fields, |f| f.name.as_str()),
            vec!["color", "skin_thickness"]
        );
        assert_eq!(
            names(&fruit.accessors, |a| a.name.as_str()),
            vec!["color", "skin_thickness"]
        );
        assert_eq!(
            names(&fruit.withers, |w| w.name.as_str()),
            vec!["with_color", "with_skin_thickness"]
        );
        assert_eq!(fruit.accessors[1].ty, FieldType::int());
        assert_eq!(fruit.fields[1].default, Some(DefaultValue::Int(1)));
        assert!(fruit.builder.is_none());

        let full = fruit.full_factory.as_ref().unwrap();
        assert_eq!(full.name, "new");
        assert_eq!(names(&full.params, |p| p.name.as_str()), vec!["color", "skin_thickness"]);
        assert_eq!(full.params[0].ty, FieldType::string());
        assert_eq!(fruit.empty_factory.name, "create");
        assert!(fruit.empty_factory.params.is_empty());
        assert_eq!(fruit.updater.as_ref().unwrap().params.len(), 2);
    }

    #[test]
    fn test_fruit_members_pascal() {
        let fruit = Transformer::new(&TEST_PASCAL_NAMING)
            .generate(&fruit_spec())
            .unwrap();

        assert_eq!(
            names(&fruit.accessors, |a| a.name.as_str()),
            vec!["Color", "SkinThickness"]
        );
        assert_eq!(
            names(&fruit.withers, |w| w.name.as_str()),
            vec!["WithColor", "WithSkinThickness"]
        );
        assert_eq!(
            names(&fruit.fields, |f| f.name.as_str()),
            vec!["color", "skinThickness"]
        );
        assert_eq!(fruit.file_stem, "Fruit");
        assert_eq!(fruit.empty_factory.name, "Create");
        assert_eq!(fruit.full_factory.unwrap().name, "Create");
        assert_eq!(fruit.updater.unwrap().name, "With");
    }

    #[test]
    fn test_zero_fields() {
        let empty = generate(&TypeSpec::new("Empty")).unwrap();

        assert!(empty.is_empty());
        assert!(empty.withers.is_empty());
        assert!(empty.accessors.is_empty());
        assert_eq!(empty.empty_factory.name, "create");
        assert!(empty.full_factory.is_none());
        assert!(empty.updater.is_none());
    }

    #[test]
    fn test_builder_members() {
        let basket = generate(&basket_spec()).unwrap();
        let builder = basket.builder.unwrap();

        assert_eq!(builder.name, "BasketBuilder");
        assert!(!builder.nested);
        assert_eq!(
            names(&builder.properties, |p| p.getter.as_str()),
            vec!["size", "contents"]
        );
        assert_eq!(
            names(&builder.properties, |p| p.setter.as_str()),
            vec!["set_size", "set_contents"]
        );
        assert_eq!(builder.create_builder, "create_builder");
        assert_eq!(builder.to_builder, "to_builder");
        assert_eq!(builder.to_immutable, "to_immutable");
    }

    #[test]
    fn test_builder_members_pascal() {
        let basket = Transformer::new(&TEST_PASCAL_NAMING)
            .generate(&basket_spec())
            .unwrap();
        let builder = basket.builder.unwrap();

        assert_eq!(builder.name, "Builder");
        assert!(builder.nested);
        assert_eq!(builder.properties[0].getter, "Size");
        assert_eq!(builder.properties[0].setter, "Size");
        assert_eq!(builder.create_builder, "CreateBuilder");
        assert_eq!(builder.to_immutable, "ToImmutable");
    }

    #[test]
    fn test_builder_without_fields() {
        let empty = generate(&TypeSpec::new("Empty").with_builder(true)).unwrap();
        let builder = empty.builder.unwrap();
        assert!(builder.properties.is_empty());
        assert_eq!(builder.name, "EmptyBuilder");
    }

    #[test]
    fn test_duplicate_field() {
        let spec = TypeSpec::new("Fruit")
            .field("color", FieldType::string())
            .field("color", FieldType::string());

        assert_eq!(
            generate(&spec),
            Err(TransformError::DuplicateField {
                type_name: "Fruit".into(),
                field: "color".into(),
                first: "color".into(),
            })
        );
    }

    #[test]
    fn test_duplicate_after_case_conversion() {
        let spec = TypeSpec::new("Fruit")
            .field("skinThickness", FieldType::int())
            .field("skin_thickness", FieldType::int());

        let err = generate(&spec).unwrap_err();
        assert!(matches!(
            err,
            TransformError::DuplicateField { ref field, ref first, .. }
                if field == "skin_thickness" && first == "skinThickness"
        ));
    }

    #[test]
    fn test_duplicate_reported_before_type_errors() {
        let spec = TypeSpec::new("Fruit")
            .field("seeds", FieldType::named("Seed"))
            .field("seeds", FieldType::int());

        let err = Transformer::new(&TEST_NAMING)
            .with_schema(&schema(vec![]))
            .generate(&spec)
            .unwrap_err();
        assert!(matches!(err, TransformError::DuplicateField { .. }));
    }

    #[test]
    fn test_invalid_type_name() {
        let err = generate(&TypeSpec::new("2Fruit")).unwrap_err();
        assert!(matches!(err, TransformError::InvalidIdentifier { field: None, .. }));
        assert_eq!(err.location(), "types.2Fruit");
    }

    #[test]
    fn test_unescapable_type_name() {
        let err = generate(&TypeSpec::new("self")).unwrap_err();
        assert!(err.to_string().contains("'Self' cannot be used as an identifier"));
    }

    #[test]
    fn test_unescapable_file_stem() {
        let err = generate(&TypeSpec::new("Super")).unwrap_err();
        assert!(err.to_string().contains("'super' cannot be used as an identifier"));
    }

    #[test]
    fn test_reserved_type_name() {
        let err = generate(&TypeSpec::new("Option")).unwrap_err();
        assert!(err.to_string().contains("would shadow"));
    }

    #[test]
    fn test_invalid_field_name() {
        let spec = TypeSpec::new("Fruit").field("skin-thickness", FieldType::int());
        let err = generate(&spec).unwrap_err();
        assert_eq!(err.location(), "types.Fruit.fields.skin-thickness");
    }

    #[test]
    fn test_unescapable_field_name() {
        let spec = TypeSpec::new("Fruit").field("self", FieldType::int());
        let err = generate(&spec).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidIdentifier { ref name, .. } if name == "self"
        ));
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let spec = TypeSpec::new("Token").field("type", FieldType::string());
        let token = generate(&spec).unwrap();

        assert_eq!(token.fields[0].name, "r#type");
        assert_eq!(token.fields[0].param, "r#type");
        assert_eq!(token.fields[0].source, "type");
        assert_eq!(token.accessors[0].name, "r#type");
        assert_eq!(token.withers[0].name, "with_type");
    }

    #[test]
    fn test_field_named_like_trait_method() {
        let spec = TypeSpec::new("Fruit").field("clone", FieldType::string());
        let fruit = generate(&spec).unwrap();

        assert_eq!(fruit.fields[0].name, "clone");
        assert_eq!(fruit.accessors[0].name, "clone");
        assert_eq!(fruit.withers[0].name, "with_clone");

        let basket = TypeSpec::new("Basket")
            .field("fruit", FieldType::named("Fruit"))
            .with_builder(true);
        let schema = schema(vec![spec, basket.clone()]);
        assert!(Transformer::new(&TEST_NAMING).with_schema(&schema).generate(&basket).is_ok());
    }

    #[test]
    fn test_accessor_collides_with_wither() {
        let spec = TypeSpec::new("Fruit")
            .field("color", FieldType::string())
            .field("with_color", FieldType::string());

        let err = generate(&spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid identifier 'with_color' in 'Fruit': accessor of 'with_color' collides with wither of 'color'"
        );
        assert_eq!(err.location(), "types.Fruit.fields.with_color");
    }

    #[test]
    fn test_accessor_collides_with_factory() {
        let spec = TypeSpec::new("Fruit").field("new", FieldType::string());
        let err = generate(&spec).unwrap_err();
        assert!(err.to_string().contains("collides with the full factory"));
    }

    #[test]
    fn test_property_named_like_type() {
        let spec = TypeSpec::new("Fruit").field("fruit", FieldType::string());
        let err = Transformer::new(&TEST_PASCAL_NAMING)
            .generate(&spec)
            .unwrap_err();
        assert!(err.to_string().contains("collides with the type itself"));

        // Methods and types never share a name under snake_case members
        assert!(generate(&spec).is_ok());
    }

    #[test]
    fn test_builder_setter_collides_with_getter() {
        let spec = TypeSpec::new("Fruit")
            .field("color", FieldType::string())
            .field("set_color", FieldType::string())
            .with_builder(true);

        let err = generate(&spec).unwrap_err();
        assert!(err.to_string().contains("builder getter of 'set_color'"));
    }

    #[test]
    fn test_unknown_named_type() {
        let spec = TypeSpec::new("Basket").field("contents", FieldType::list(FieldType::named("Fruit")));

        let err = Transformer::new(&TEST_NAMING)
            .with_schema(&schema(vec![spec.clone()]))
            .generate(&spec)
            .unwrap_err();
        assert_eq!(
            err,
            TransformError::UnsupportedFieldType {
                type_name: "Basket".into(),
                field: "contents".into(),
                ty: "list<Fruit>".into(),
                reason: "unknown type 'Fruit'".into(),
            }
        );

        // Without a schema, references are not resolved
        assert!(generate(&spec).is_ok());
    }

    #[test]
    fn test_known_named_type() {
        let schema = schema(vec![fruit_spec(), basket_spec()]);
        let transformer = Transformer::new(&TEST_NAMING).with_schema(&schema);

        for spec in &schema.types {
            assert!(transformer.generate(spec).is_ok());
        }
    }

    #[test]
    fn test_self_reference() {
        let direct = TypeSpec::new("Node").field("next", FieldType::named("Node"));
        assert!(generate(&direct).is_err());

        let optional = TypeSpec::new("Node").field("next", FieldType::optional(FieldType::named("Node")));
        assert!(generate(&optional).is_err());

        let listed = TypeSpec::new("Node").field("children", FieldType::list(FieldType::named("Node")));
        assert!(generate(&listed).is_ok());
    }

    #[test]
    fn test_mutual_reference_by_value() {
        let a = TypeSpec::new("A").field("b", FieldType::named("B"));
        let b = TypeSpec::new("B").field("a", FieldType::optional(FieldType::named("A")));
        let schema = schema(vec![a.clone(), b]);

        let err = Transformer::new(&TEST_NAMING)
            .with_schema(&schema)
            .generate(&a)
            .unwrap_err();
        assert!(err.to_string().contains("would contain itself by value"));
    }

    #[test]
    fn test_unsupported_shapes() {
        let float_key = TypeSpec::new("Prices").field(
            "byWeight",
            FieldType::map(FieldType::Primitive(frost_ir::PrimitiveType::Double), FieldType::int()),
        );
        assert!(
            generate(&float_key)
                .unwrap_err()
                .to_string()
                .contains("map keys must be a non-floating primitive")
        );

        let nested = TypeSpec::new("Maybe").field(
            "value",
            FieldType::optional(FieldType::optional(FieldType::int())),
        );
        assert!(
            generate(&nested)
                .unwrap_err()
                .to_string()
                .contains("nested optionals")
        );
    }

    #[test]
    fn test_default_must_fit() {
        let spec = TypeSpec::new("Fruit").with_field(
            FieldSpec::new("color", FieldType::string()).default_value(DefaultValue::Int(3)),
        );
        let err = generate(&spec).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedFieldType { .. }));
        assert!(err.to_string().contains("integer default is not a valid 'string' value"));
    }

    #[test]
    fn test_default_outside_target_range() {
        let gauge = TypeSpec::new("Gauge").with_field(
            FieldSpec::new("level", FieldType::Primitive(PrimitiveType::Float))
                .default_value(DefaultValue::Float(1e300)),
        );
        let err = generate(&gauge).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedFieldType { .. }));

        let glyph = TypeSpec::new("Glyph").with_field(
            FieldSpec::new("mark", FieldType::Primitive(PrimitiveType::Char))
                .default_value(DefaultValue::String("😀".into())),
        );
        let err = generate(&glyph).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedFieldType { .. }));
    }

    #[test]
    fn test_builder_collides_with_declared_type() {
        let fruit = fruit_spec().with_builder(true);
        let schema = schema(vec![fruit.clone(), TypeSpec::new("FruitBuilder")]);

        let err = Transformer::new(&TEST_NAMING)
            .with_schema(&schema)
            .generate(&fruit)
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidIdentifier { ref name, .. } if name == "FruitBuilder"
        ));

        // A nested builder lives inside its type
        let ok = Transformer::new(&TEST_PASCAL_NAMING)
            .with_schema(&schema)
            .generate(&fruit);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let transformer = Transformer::new(&TEST_NAMING);
        let spec = basket_spec();
        assert_eq!(transformer.generate(&spec), transformer.generate(&spec));
    }
}
