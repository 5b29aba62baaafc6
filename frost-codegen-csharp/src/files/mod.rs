//! Files produced by the C# backend.

mod class_file;
mod optional_file;

pub use class_file::ClassFile;
pub use optional_file::OptionalFile;

/// Leading lines that mark a file as generated.
pub const GENERATED_HEADER: &str = "// <auto-generated>\n//     This code was generated by frost.";

/// Full header block written at the top of every file.
pub const HEADER: &str = "// <auto-generated>\n//     This code was generated by frost.\n//     Changes to this file will be lost when the code is regenerated.\n// </auto-generated>";
