use std::os::raw::c_int;
use std::path::{Path, PathBuf};

use libloading::Library;
use log::info;

use super::MoveResolver;
use crate::board::EncodedBoard;
use crate::config::ResolverConfig;

type DecideFn = unsafe extern "C" fn(u64) -> c_int;

#[derive(thiserror::Error, Debug)]
pub enum ResolverError {
    #[error("failed to load native library {}: {source}", path.display())]
    Library {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol `{symbol}` not found in {}: {source}", path.display())]
    Symbol {
        path: PathBuf,
        symbol: String,
        #[source]
        source: libloading::Error,
    },
}

/// The prebuilt move-decision library, loaded once and called read-only.
///
/// The library stays mapped for as long as this value lives; dropping it
/// unloads the library. A crash inside the native call is not recoverable and
/// takes the process down with it.
pub struct NativeResolver {
    decide: DecideFn,
    path: PathBuf,
    // Keeps `decide` valid. Must outlive every call through it.
    _library: Library,
}

impl NativeResolver {
    /// Load `symbol` from the shared library at `path`.
    pub fn load<P: AsRef<Path>>(path: P, symbol: &str) -> Result<Self, ResolverError> {
        let path = path.as_ref().to_path_buf();
        // SAFETY: runs the library's initialisers, nothing else.
        let library = unsafe { Library::new(&path) }
            .map_err(|source| ResolverError::Library { path: path.clone(), source })?;
        // SAFETY: the exported function is declared `int f(uint64_t)`.
        let decide: DecideFn = unsafe {
            *library
                .get::<DecideFn>(symbol.as_bytes())
                .map_err(|source| ResolverError::Symbol {
                    path: path.clone(),
                    symbol: symbol.to_string(),
                    source,
                })?
        };
        info!("loaded native resolver `{}` from {}", symbol, path.display());
        Ok(Self { decide, path, _library: library })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolverError> {
        Self::load(&config.library, &config.symbol)
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl MoveResolver for NativeResolver {
    fn decide(&self, board: EncodedBoard) -> i32 {
        // SAFETY: `_library` is still loaded, and the engine accepts any u64.
        unsafe { (self.decide)(board.raw()) as i32 }
    }
}

impl std::fmt::Debug for NativeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeResolver").field("path", &self.path).finish_non_exhaustive()
    }
}
