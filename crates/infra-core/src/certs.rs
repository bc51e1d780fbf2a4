//! CA trust pool
//!
//! Certificate folders are scanned in order. The first folder holding at
//! least one readable CA bundle (`ca.pem` or `*.ca.pem`) supplies the pool,
//! on top of the platform's native roots. Later folders are not consulted.
//! Without a usable folder the pool stays empty.

use std::sync::Arc;

use infra_fs::{NormalizedPath, io};
use rustls::{ClientConfig, RootCertStore};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Exact name of the primary bundle.
pub const BUNDLE_FILE: &str = "ca.pem";
/// Suffix of additional bundles.
pub const BUNDLE_SUFFIX: &str = ".ca.pem";

/// The trust pool built from the first usable certificate folder.
#[derive(Debug, Clone)]
pub struct Certs {
    folder: Option<NormalizedPath>,
    files: Vec<String>,
    system_roots: usize,
    roots: Arc<RootCertStore>,
}

impl Default for Certs {
    fn default() -> Self {
        Self {
            folder: None,
            files: Vec::new(),
            system_roots: 0,
            roots: Arc::new(RootCertStore::empty()),
        }
    }
}

impl Certs {
    /// Scan `folders` in order and build the pool from the first usable one.
    ///
    /// Never fails: unreadable folders and bundles are logged and skipped.
    pub fn load(folders: &[NormalizedPath]) -> Self {
        for folder in folders {
            match Self::load_folder(folder) {
                Ok(Some(certs)) => {
                    info!(
                        folder = %folder,
                        files = certs.files.len(),
                        system_roots = certs.system_roots,
                        roots = certs.roots.len(),
                        "Built certificate trust pool"
                    );
                    return certs;
                }
                Ok(None) => debug!(folder = %folder, "No CA bundles in folder"),
                Err(e) => debug!(folder = %folder, error = %e, "Skipping certificate folder"),
            }
        }
        Self::default()
    }

    fn load_folder(folder: &NormalizedPath) -> Result<Option<Self>> {
        if !io::is_non_empty_dir(folder)? {
            return Ok(None);
        }

        let mut roots = RootCertStore::empty();
        let mut files = Vec::new();
        for path in io::list_files(folder)? {
            let Some(name) = path.file_name().filter(|name| is_bundle(name)) else {
                continue;
            };
            let data = match io::read_bytes(&path) {
                Ok(data) if !data.is_empty() => data,
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = %path, error = %e, "Unreadable CA bundle");
                    continue;
                }
            };
            if add_bundle(&mut roots, &path, &data) > 0 {
                files.push(name.to_string());
            }
        }

        if files.is_empty() {
            return Ok(None);
        }
        let system_roots = add_native_roots(&mut roots);
        Ok(Some(Self {
            folder: Some(folder.clone()),
            files,
            system_roots,
            roots: Arc::new(roots),
        }))
    }

    /// Native and bundled roots; empty when no bundle was found.
    pub fn root_store(&self) -> &RootCertStore {
        &self.roots
    }

    /// Names of the bundles that contributed at least one certificate.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// How many roots came from the platform store.
    pub fn system_roots(&self) -> usize {
        self.system_roots
    }

    /// The folder the pool was built from.
    pub fn folder(&self) -> Option<&NormalizedPath> {
        self.folder.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// A TLS client configuration trusting exactly this pool.
    pub fn client_config(&self) -> Result<Arc<ClientConfig>> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .map_err(Error::Tls)?
            .with_root_certificates(Arc::clone(&self.roots))
            .with_no_client_auth();
        Ok(Arc::new(config))
    }
}

fn is_bundle(name: &str) -> bool {
    name == BUNDLE_FILE || name.ends_with(BUNDLE_SUFFIX)
}

/// Seed `roots` with the platform's trusted roots. A platform store that
/// cannot be read contributes nothing.
fn add_native_roots(roots: &mut RootCertStore) -> usize {
    let native = rustls_native_certs::load_native_certs();
    for e in &native.errors {
        debug!(error = %e, "Could not read native root certificates");
    }
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    if ignored > 0 {
        debug!(ignored, "Ignored unparsable native root certificates");
    }
    added
}

/// Add every certificate in `data` to `roots`, returning how many were accepted.
fn add_bundle(roots: &mut RootCertStore, path: &NormalizedPath, data: &[u8]) -> usize {
    let mut added = 0;
    for cert in rustls_pemfile::certs(&mut &data[..]) {
        match cert.map_err(|e| e.to_string()).and_then(|cert| roots.add(cert).map_err(|e| e.to_string())) {
            Ok(()) => added += 1,
            Err(e) => warn!(path = %path, error = %e, "Rejected certificate in CA bundle"),
        }
    }
    added
}
