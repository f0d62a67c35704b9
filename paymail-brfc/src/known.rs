//! Built-in BRFC catalog.
//!
//! The specifications a paymail host advertises out of the box. Every id
//! below is the fingerprint of its own author, title and version.

use crate::BrfcSpec;

/// The BRFC assignment scheme itself. Not part of the built-in catalog.
pub const BRFC_SPECIFICATIONS: &str = "57dd1f54fc67";
pub const SERVICE_DISCOVERY: &str = "849f2f90ae5f";
pub const PUBLIC_KEY_INFRASTRUCTURE: &str = "ba4ba843a7d6";
pub const BASIC_ADDRESS_RESOLUTION: &str = "c9ca939e2f69";
pub const PAYER_VALIDATION: &str = "f0bedd0fdc62";
pub const PAYTO_PROTOCOL_PREFIX: &str = "74524c4d6274";
pub const SPP_INTEGRATION: &str = "0036f9b8860f";
pub const RECEIVER_APPROVALS: &str = "ac9a24bc6074";
pub const PUBLIC_PROFILE: &str = "f12f968c92d6";
pub const VERIFY_PUBLIC_KEY_OWNER: &str = "3ea5191fc7dd";
pub const P2P_PAYMENT_DESTINATION: &str = "4484282594d4";
pub const P2P_TRANSACTIONS: &str = "c558903adaef";
pub const P2P_PAYMENT_DESTINATION_TOKENS: &str = "f792b6eff07a";
pub const P2P_TRANSACTIONS_TOKENS: &str = "692ca9707bdf";
pub const ASSET_INFORMATION: &str = "1300361cb2d4";
pub const SFP_BUILD_ACTION: &str = "8185829755b3";
pub const SFP_AUTHORISE_ACTION: &str = "aea26ee4d7a2";
pub const BEEF_TRANSACTIONS: &str = "59bd4dee866f";
pub const PIKE_CONTACT_EXCHANGE: &str = "813c6587801b";

const NCHAIN: &str = "andy (nChain)";
const MONEY_BUTTON_P2P: &str =
    "Miguel Duarte, Ryan X. Charles, Ivan Mlinaric, Rafa Jimenez Seibane (Money Button)";
const FABRIIK: &str = "Fabriik";
const VAIONEX: &str = "Darren Kellenschwiler (Vaionex)";

struct KnownSpec {
    id: &'static str,
    author: &'static str,
    title: &'static str,
    version: &'static str,
    url: Option<&'static str>,
}

const KNOWN_SPECS: &[KnownSpec] = &[
    KnownSpec {
        id: SERVICE_DISCOVERY,
        author: NCHAIN,
        title: "bsvalias Service Discovery",
        version: "1",
        url: Some("http://bsvalias.org/02-service-discovery.html"),
    },
    KnownSpec {
        id: PUBLIC_KEY_INFRASTRUCTURE,
        author: NCHAIN,
        title: "bsvalias Public Key Infrastructure",
        version: "1",
        url: Some("http://bsvalias.org/03-public-key-infrastructure.html"),
    },
    KnownSpec {
        id: BASIC_ADDRESS_RESOLUTION,
        author: NCHAIN,
        title: "bsvalias Payment Addressing (Basic Address Resolution)",
        version: "1",
        url: Some("http://bsvalias.org/04-01-basic-address-resolution.html"),
    },
    KnownSpec {
        id: PAYER_VALIDATION,
        author: "andy (nChain), Ryan X. Charles (Money Button)",
        title: "bsvalias Payment Addressing (Payer Validation)",
        version: "1",
        url: Some("http://bsvalias.org/04-02-sender-validation.html"),
    },
    KnownSpec {
        id: PAYTO_PROTOCOL_PREFIX,
        author: NCHAIN,
        title: "bsvalias Payment Addressing (PayTo Protocol Prefix)",
        version: "1",
        url: Some("http://bsvalias.org/04-04-payto-protocol-prefix.html"),
    },
    KnownSpec {
        id: SPP_INTEGRATION,
        author: NCHAIN,
        title: "bsvalias Integration with Simplified Payment Protocol",
        version: "1",
        url: Some("http://bsvalias.org/05-01-simplified-payment-protocol.html"),
    },
    KnownSpec {
        id: RECEIVER_APPROVALS,
        author: NCHAIN,
        title: "bsvalias Payment Addressing (Receiver Approvals)",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: PUBLIC_PROFILE,
        author: "Ryan X. Charles (Money Button)",
        title: "Public Profile (Name & Avatar)",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: VERIFY_PUBLIC_KEY_OWNER,
        author: "Miguel Duarte (Money Button)",
        title: "Verify Public Key Owner",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: P2P_PAYMENT_DESTINATION,
        author: MONEY_BUTTON_P2P,
        title: "P2P Payment Destination",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: P2P_TRANSACTIONS,
        author: MONEY_BUTTON_P2P,
        title: "P2P Transactions",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: P2P_PAYMENT_DESTINATION_TOKENS,
        author: FABRIIK,
        title: "P2P Payment Destination with Tokens Support",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: P2P_TRANSACTIONS_TOKENS,
        author: FABRIIK,
        title: "P2P Transactions with Tokens Support",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: ASSET_INFORMATION,
        author: FABRIIK,
        title: "Asset Information",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: SFP_BUILD_ACTION,
        author: VAIONEX,
        title: "SFP Build Action",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: SFP_AUTHORISE_ACTION,
        author: VAIONEX,
        title: "SFP Authorise Action",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: BEEF_TRANSACTIONS,
        author: FABRIIK,
        title: "Beef Transactions",
        version: "1",
        url: None,
    },
    KnownSpec {
        id: PIKE_CONTACT_EXCHANGE,
        author: FABRIIK,
        title: "PIKE Contact Exchange",
        version: "1",
        url: None,
    },
];

/// Number of specifications in the built-in catalog.
pub const KNOWN_SPEC_COUNT: usize = KNOWN_SPECS.len();

/// Fresh copies of the built-in catalog, in seeding order.
///
/// Every catalog id is the fingerprint of its own fields, so entries are
/// marked valid without recomputing.
pub fn known_specs() -> Vec<BrfcSpec> {
    KNOWN_SPECS
        .iter()
        .map(|known| {
            let mut spec =
                BrfcSpec::new(known.author, known.title, known.version).with_id(known.id);
            spec.url = known.url.map(str::to_string);
            spec.valid = true;
            spec
        })
        .collect()
}
