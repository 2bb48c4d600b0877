use std::fmt;

/// The three credentials embedded in the generated header, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertKind {
    RootCa,
    ClientCert,
    PrivateKey,
}

impl CertKind {
    pub const ALL: [CertKind; 3] = [CertKind::RootCa, CertKind::ClientCert, CertKind::PrivateKey];

    /// C identifier of the array holding this credential
    pub fn array_name(&self) -> &'static str {
        match self {
            CertKind::RootCa => "mqtt_root_ca",
            CertKind::ClientCert => "mqtt_client_cert",
            CertKind::PrivateKey => "mqtt_private_key",
        }
    }
}

impl fmt::Display for CertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.array_name())
    }
}

/// A complete set of PEM texts, ready for header generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSet {
    pub root_ca: String,
    pub client_cert: String,
    pub private_key: String,
}

impl CertificateSet {
    pub fn new(root_ca: String, client_cert: String, private_key: String) -> Self {
        Self {
            root_ca,
            client_cert,
            private_key,
        }
    }

    pub fn get(&self, kind: CertKind) -> &str {
        match kind {
            CertKind::RootCa => &self.root_ca,
            CertKind::ClientCert => &self.client_cert,
            CertKind::PrivateKey => &self.private_key,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CertKind, &str)> {
        CertKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Result of the read stage: any entry may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedCertificates {
    pub root_ca: Option<String>,
    pub client_cert: Option<String>,
    pub private_key: Option<String>,
}

impl LoadedCertificates {
    pub fn missing(&self) -> Vec<CertKind> {
        let slots = [&self.root_ca, &self.client_cert, &self.private_key];
        CertKind::ALL
            .into_iter()
            .zip(slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(kind, _)| kind)
            .collect()
    }

    /// Returns the kinds that were absent when the set is incomplete.
    pub fn complete(self) -> Result<CertificateSet, Vec<CertKind>> {
        match self {
            LoadedCertificates {
                root_ca: Some(root_ca),
                client_cert: Some(client_cert),
                private_key: Some(private_key),
            } => Ok(CertificateSet::new(root_ca, client_cert, private_key)),
            partial => Err(partial.missing()),
        }
    }
}
