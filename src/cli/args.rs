use clap::{Parser, ValueEnum};
use jdecl_emitter::EmitPass;
use std::path::PathBuf;

/// CLI arguments for the jdecl binary.
#[derive(Parser, Debug)]
#[command(
    name = "jdecl",
    version,
    about = "Synthesizes header declarations for translated Java types"
)]
pub struct CliArgs {
    /// JSON file with the resolved types (an array, or an object with `types`).
    pub input: PathBuf,

    /// Options file (camelCase JSON); replaces options embedded in the input.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Which header to produce.
    #[arg(long, value_enum, default_value_t = Pass::Public)]
    pub pass: Pass,

    /// Write the declarations to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    // ==================== Option overrides ====================
    /// Emit nullability attributes.
    #[arg(long)]
    pub nullability: bool,

    /// Declare class-level accessor methods for static fields.
    #[arg(long = "static-accessor-methods")]
    pub static_accessor_methods: bool,

    /// Swift-friendly output (implies nullability and static accessors).
    #[arg(long = "swift-friendly")]
    pub swift_friendly: bool,

    /// Mark deprecated declarations with the deprecated attribute.
    #[arg(long = "generate-deprecated-declarations")]
    pub generate_deprecated_declarations: bool,

    /// Type-name prefix for a package, as `package=PREFIX`. Repeatable.
    #[arg(long = "prefix", value_name = "PACKAGE=PREFIX")]
    pub prefixes: Vec<String>,

    /// Color diagnostics (defaults to whether stderr is a terminal).
    #[arg(long)]
    pub pretty: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pass {
    Public,
    Private,
}

impl From<Pass> for EmitPass {
    fn from(pass: Pass) -> Self {
        match pass {
            Pass::Public => EmitPass::Public,
            Pass::Private => EmitPass::Private,
        }
    }
}
