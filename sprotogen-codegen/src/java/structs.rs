//! Java class generation for structs.
//!
//! Each struct becomes a `SprotoObject` with a presence bitmap (`Tags`), one
//! private member and accessor triple per field, a tag-driven `decode` and a
//! bitmap-driven `encode`.

use crate::error::CodegenError;
use crate::java::types::{FieldBinding, TypeResolver};
use crate::java::{float_literal, upper_first};
use sprotogen_schema::{FixedPoint, SchemaField, SchemaStruct};
use std::fmt::Write;

/// Name of the presence bitmap member, kept apart from schema field names.
const PRESENCE: &str = "_tags";

/// A field together with everything the template needs from it.
struct RenderedField<'f> {
    field: &'f SchemaField,
    binding: FieldBinding,
    upper: String,
}

/// Generator for struct classes.
pub struct StructGenerator<'a> {
    types: TypeResolver<'a>,
    banner: &'a str,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(types: TypeResolver<'a>, banner: &'a str) -> Self {
        Self { types, banner }
    }

    /// Generates the class for `st` placed in `namespace`.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field cannot be resolved or the output
    /// cannot be formatted.
    pub fn generate(&self, st: &SchemaStruct, namespace: &str) -> Result<String, CodegenError> {
        let fields = st
            .fields
            .iter()
            .map(|field| self.render_field(field, namespace))
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = String::new();
        self.write_header(&mut output, namespace)?;

        writeln!(output, "public class {} implements SprotoObject {{", st.name)?;
        writeln!(output, "    private Tags {PRESENCE} = new Tags();")?;
        for f in &fields {
            writeln!(output, "    private {} {};", f.binding.type_name, f.field.name)?;
        }
        writeln!(output)?;

        for f in &fields {
            write_accessors(&mut output, f)?;
        }
        write_decode(&mut output, &fields)?;
        write_encode(&mut output, &fields)?;

        writeln!(output, "}}")?;
        Ok(output)
    }

    fn render_field<'f>(
        &self,
        field: &'f SchemaField,
        namespace: &str,
    ) -> Result<RenderedField<'f>, CodegenError> {
        let numeric = field.kind.is_int32() || field.kind.is_wide_numeric();
        if field.fixed_point.is_some() && (field.repeated || !numeric) {
            return Err(CodegenError::InvalidFixedPoint {
                field: field.name.clone(),
                kind: field.kind,
            });
        }
        if let Some(fixed) = field.fixed_point.filter(|f| !f.is_valid()) {
            return Err(CodegenError::InvalidScale {
                field: field.name.clone(),
                scale: fixed.scale,
            });
        }

        Ok(RenderedField {
            field,
            binding: self.types.resolve(field, namespace)?,
            upper: upper_first(&field.name),
        })
    }

    fn write_header(&self, output: &mut String, namespace: &str) -> std::fmt::Result {
        writeln!(output, "{}", self.banner)?;
        writeln!(output)?;
        if !namespace.is_empty() {
            writeln!(output, "package {namespace};")?;
            writeln!(output)?;
        }
        writeln!(output, "import java.util.*;")?;
        writeln!(output, "import java.nio.ByteBuffer;")?;
        writeln!(output, "import sproto.*;")?;
        writeln!(output, "import static sproto.Util.enums;")?;
        writeln!(output)
    }
}

/// Writes the getter, setter and presence check of a field.
fn write_accessors(output: &mut String, f: &RenderedField<'_>) -> std::fmt::Result {
    let RenderedField {
        field,
        binding,
        upper,
    } = f;
    let (name, tag, ty) = (&field.name, field.tag, &binding.type_name);

    writeln!(output, "    public {ty} get{upper}() {{")?;
    writeln!(output, "        return {name};")?;
    writeln!(output, "    }}")?;
    writeln!(output)?;
    writeln!(output, "    public void set{upper}({ty} val) {{")?;
    writeln!(output, "        this.{name} = val;")?;
    writeln!(output, "        {PRESENCE}.setTag({tag});")?;
    writeln!(output, "    }}")?;
    writeln!(output)?;
    writeln!(output, "    public boolean isSet{upper}() {{")?;
    writeln!(output, "        return {PRESENCE}.hasTag({tag});")?;
    writeln!(output, "    }}")?;
    writeln!(output)?;

    if let Some(fixed) = field.fixed_point {
        write_fixed_point_accessors(output, f, fixed)?;
    }
    Ok(())
}

/// Writes the float view of a fixed-point field.
///
/// The setter truncates through the integer cast, so it is not an exact
/// inverse of the getter.
fn write_fixed_point_accessors(
    output: &mut String,
    f: &RenderedField<'_>,
    fixed: FixedPoint,
) -> std::fmt::Result {
    let (name, tag, upper) = (&f.field.name, f.field.tag, &f.upper);
    let ty = &f.binding.type_name;

    writeln!(output, "    public void set{upper}Ext(float val) {{")?;
    writeln!(
        output,
        "        this.{name} = ({ty})(val * {});",
        float_literal(fixed.reciprocal())
    )?;
    writeln!(output, "        {PRESENCE}.setTag({tag});")?;
    writeln!(output, "    }}")?;
    writeln!(output)?;
    writeln!(output, "    public float get{upper}Ext() {{")?;
    writeln!(output, "        return {name} * {};", float_literal(fixed.scale))?;
    writeln!(output, "    }}")?;
    writeln!(output)
}

/// Writes `decode`, dispatching each tag present on the wire to its field.
fn write_decode(output: &mut String, fields: &[RenderedField<'_>]) -> std::fmt::Result {
    writeln!(output, "    public void decode(Decoder decoder) {{")?;
    writeln!(output, "        int[] present = decoder.tags();")?;
    writeln!(output, "        for (int i = 0; i < present.length; i++) {{")?;
    writeln!(output, "            switch (present[i]) {{")?;
    for f in fields {
        writeln!(output, "                case {}:", f.field.tag)?;
        writeln!(
            output,
            "                    this.{} = {};",
            f.field.name, f.binding.decode
        )?;
        writeln!(output, "                    {PRESENCE}.setTag({});", f.field.tag)?;
        writeln!(output, "                    break;")?;
    }
    writeln!(output, "            }}")?;
    writeln!(output, "        }}")?;
    writeln!(output, "    }}")?;
    writeln!(output)
}

/// Writes `encode`, visiting only the tags set in the presence bitmap.
fn write_encode(output: &mut String, fields: &[RenderedField<'_>]) -> std::fmt::Result {
    writeln!(output, "    public void encode(Encoder encoder) {{")?;
    writeln!(output, "        {PRESENCE}.each(tag -> {{")?;
    writeln!(output, "            switch (tag) {{")?;
    for f in fields {
        writeln!(output, "                case {}:", f.field.tag)?;
        writeln!(output, "                    {};", f.binding.encode)?;
        writeln!(output, "                    break;")?;
    }
    writeln!(output, "            }}")?;
    writeln!(output, "        }});")?;
    writeln!(output, "    }}")
}
