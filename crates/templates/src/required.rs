use asyncgen_asyncapi::Schema;

/// Whether `field` is listed in the schema's `required` properties.
pub fn is_required(schema: &Schema, field: &str) -> bool {
    schema.required.iter().any(|required| required == field)
}
