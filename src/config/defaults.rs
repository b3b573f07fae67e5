//! Default configuration values

/// Solution descriptor, relative to the workspace root
pub const SOLUTION_PATH: &str = "Source/CombatExtended.sln";

/// Directory project paths in the solution are relative to
pub const SOURCE_DIR: &str = "Source";

/// Output root for artifacts that are not relocated
pub const OUTPUT_ROOT: &str = "AssembliesCompat";

/// Staging root for relocated mod-patch artifacts
pub const PATCH_ROOT: &str = "ModPatches";

/// Marker in a declared output path that triggers relocation
pub const RELOCATION_MARKER: &str = "ModPatches";

/// Extension of the artifact the helper produces
pub const ARTIFACT_EXTENSION: &str = "dll";

/// Project descriptor element holding the declared output path
pub const OUTPUT_PATH_ELEMENT: &str = "OutputPath";

/// Environment variable overriding the publicizer path
pub const ENV_PUBLICIZER: &str = "PUBLICIZER";

/// Environment variable overriding the download-libs flag
pub const ENV_DOWNLOAD_LIBS: &str = "DOWNLOAD_LIBS";

/// Publicizer tool path handed to the helper
pub const PUBLICIZER: &str = "./AssemblyPublicizer";

/// Library download flag handed to the helper
pub const DOWNLOAD_LIBS: &str = "--download-libs";

/// Interpreter used to run the build helper
pub const HELPER_PROGRAM: &str = "python3";

/// Build helper script
pub const HELPER_SCRIPT: &str = "Make.py";

/// Reference to the shared base artifact every compat project builds against
pub const BASE_REFERENCE: &str = "-r:Assemblies/CombatExtended.dll";
