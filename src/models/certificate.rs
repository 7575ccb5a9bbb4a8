//! Leaf certificate type

use rustls::pki_types::CertificateDer;

/// DER encoding of the certificate a server presented first in its chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafCertificate {
    der: Vec<u8>,
}

impl LeafCertificate {
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }
}

impl From<&CertificateDer<'_>> for LeafCertificate {
    fn from(cert: &CertificateDer<'_>) -> Self {
        Self::from_der(cert.as_ref())
    }
}
