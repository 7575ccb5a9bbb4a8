//! Leaf certificate retrieval
//!
//! Performs a single TLS handshake against an endpoint and hands back the
//! first certificate the server presented. Trust verification is skipped
//! unless the settings ask for it, since only the certificate's dates matter
//! here.

use crate::config::SslSettings;
use crate::models::{Endpoint, LeafCertificate};
use crate::utils::{CheckError, Result};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, RootCertStore, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;
use tracing::debug;

/// A certificate verifier that accepts any certificate.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Fetches the leaf certificate of a TLS endpoint
pub struct SslChecker {
    settings: SslSettings,
}

impl SslChecker {
    /// Create a new SSL checker with the given settings
    pub fn new(settings: SslSettings) -> Self {
        // Already installed is fine; the ring provider is the only one compiled in
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self { settings }
    }

    fn client_config(&self) -> ClientConfig {
        if self.settings.skip_trust_verification {
            ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
                .with_no_client_auth()
        } else {
            let root_store =
                RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        }
    }

    /// Connect to `endpoint`, complete a TLS handshake and return the leaf
    /// certificate.
    ///
    /// The connection is owned by this call and closed when it returns,
    /// whichever way it returns.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<LeafCertificate> {
        let server_name = ServerName::try_from(endpoint.host().to_string()).map_err(|_| {
            CheckError::Connection {
                message: format!("invalid server name: {}", endpoint.host()),
            }
        })?;

        let connector = TlsConnector::from(Arc::new(self.client_config()));

        debug!(
            endpoint = %endpoint,
            skip_trust_verification = self.settings.skip_trust_verification,
            "connecting"
        );

        let stream = timeout(
            self.settings.connect_timeout(),
            TcpStream::connect((endpoint.host(), endpoint.port())),
        )
        .await
        .map_err(|_| CheckError::Connection {
            message: format!("TCP connection to {} timed out", endpoint),
        })?
        .map_err(|e| CheckError::Connection {
            message: e.to_string(),
        })?;

        let tls_stream = timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| CheckError::Connection {
            message: format!("TLS handshake with {} timed out", endpoint),
        })?
        .map_err(|e| CheckError::Connection {
            message: e.to_string(),
        })?;

        let (_, client_connection) = tls_stream.get_ref();

        debug!(
            protocol = ?client_connection.protocol_version(),
            cipher_suite = ?client_connection.negotiated_cipher_suite().map(|cs| cs.suite()),
            chain_length = client_connection.peer_certificates().map_or(0, |c| c.len()),
            "handshake complete"
        );

        client_connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(LeafCertificate::from)
            .ok_or(CheckError::NoCertificate)
    }
}
