//! Java enum generation.

use crate::error::CodegenError;
use sprotogen_schema::SchemaEnum;
use std::fmt::Write;

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    banner: &'a str,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(banner: &'a str) -> Self {
        Self { banner }
    }

    /// Generates the enum `en` placed in `namespace`.
    ///
    /// Members keep declaration order since the wire carries their ordinal.
    /// `byInt` returns the first member for an ordinal that matches nothing.
    ///
    /// # Errors
    /// Returns `CodegenError::Template` if the output cannot be formatted.
    pub fn generate(&self, en: &SchemaEnum, namespace: &str) -> Result<String, CodegenError> {
        let name = &en.name;
        let mut output = String::new();

        writeln!(output, "{}", self.banner)?;
        writeln!(output)?;
        if !namespace.is_empty() {
            writeln!(output, "package {namespace};")?;
            writeln!(output)?;
        }

        writeln!(output, "public enum {name} {{")?;
        for (i, member) in en.members.iter().enumerate() {
            let sep = if i + 1 == en.members.len() { ";" } else { "," };
            writeln!(output, "    {member}{sep}")?;
        }
        if en.members.is_empty() {
            writeln!(output, "    ;")?;
        }
        writeln!(output)?;

        writeln!(output, "    public static {name} byInt(int o) {{")?;
        writeln!(output, "        {name}[] vals = {name}.values();")?;
        writeln!(output, "        for (int i = 0; i < vals.length; i++) {{")?;
        writeln!(output, "            if (vals[i].ordinal() == o) {{")?;
        writeln!(output, "                return vals[i];")?;
        writeln!(output, "            }}")?;
        writeln!(output, "        }}")?;
        writeln!(output, "        return vals.length > 0 ? vals[0] : null;")?;
        writeln!(output, "    }}")?;
        writeln!(output, "}}")?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(en: &SchemaEnum, namespace: &str) -> String {
        EnumGenerator::new("// banner")
            .generate(en, namespace)
            .expect("Failed to generate")
    }

    #[test]
    fn test_generate_enum() {
        let output = generate(&SchemaEnum::new("Grade", ["A", "B", "C"]), "game");

        assert!(output.starts_with("// banner\n"));
        assert!(output.contains("package game;"));
        assert!(output.contains("public enum Grade {\n    A,\n    B,\n    C;\n"));
        assert!(output.contains("public static Grade byInt(int o) {"));
    }

    #[test]
    fn test_by_int_falls_back_to_first_member() {
        let output = generate(&SchemaEnum::new("Grade", ["A", "B", "C"]), "game");

        assert!(output.contains("if (vals[i].ordinal() == o) {"));
        assert!(output.contains("return vals.length > 0 ? vals[0] : null;"));
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let output = generate(&SchemaEnum::new("Dir", ["North", "East", "South"]), "game");

        let north = output.find("North").expect("North");
        let east = output.find("East").expect("East");
        let south = output.find("South").expect("South");
        assert!(north < east && east < south);
    }

    #[test]
    fn test_generate_empty_enum() {
        let output = generate(&SchemaEnum::new("Nothing", Vec::<String>::new()), "");

        assert!(!output.contains("package"));
        assert!(output.contains("public enum Nothing {\n    ;\n"));
    }
}
