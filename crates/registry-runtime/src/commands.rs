//! # JSON-Lines Commands
//!
//! One command per input line, one response per output line. Every byte field
//! is `0x`-prefixed hex.
//!
//! ```text
//! {"op":"submit","caller":"0xa1..","data_hash":"0x11..","da":"0xd1..","cid":"0x1234"}
//! {"ok":true,"result":null}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use shared_bus::{RegistryEvent, Subscription};
use shared_types::encoding::hex_fixed;
use shared_types::{
    to_hex, Address, Cid, DaId, DataHash, SignedSubmissionRequest, SubmissionRequest,
};

use crate::registry::{DaRegistry, RegistryError};

/// A single request to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Submit {
        #[serde(with = "hex_fixed")]
        caller: Address,
        #[serde(flatten)]
        request: SubmissionRequest,
    },
    BatchSubmit {
        #[serde(with = "hex_fixed")]
        caller: Address,
        requests: Vec<SubmissionRequest>,
    },
    DelegatedSubmit {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(flatten)]
        request: SignedSubmissionRequest,
    },
    BatchDelegatedSubmit {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        requests: Vec<SignedSubmissionRequest>,
    },
    VerifySignature {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(flatten)]
        request: SignedSubmissionRequest,
    },
    Get {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
        #[serde(with = "hex_fixed")]
        da: DaId,
    },
    GetAll {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
    },
    GetDirect {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
        #[serde(with = "hex_fixed")]
        da: DaId,
    },
    GetAllDirect {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
    },
    Extend {
        #[serde(with = "hex_fixed")]
        caller: Address,
        #[serde(with = "hex_fixed")]
        old_address: Address,
    },
    ExtendedAddresses {
        #[serde(with = "hex_fixed")]
        submitter: Address,
    },
    DomainSeparator,
    Eip712Domain,
    SubmitRequestDigest {
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
        #[serde(with = "hex_fixed")]
        da: DaId,
        cid: Cid,
    },
    /// Events published since the previous `events` command.
    Events,
    /// Prometheus text exposition.
    Metrics,
}

/// Failure details carried by a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(kind: impl Into<String>, message: impl ToString) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(ErrorBody {
                kind: kind.into(),
                message: message.to_string(),
            }),
        }
    }
}

/// Parse and run one input line.
pub async fn handle_line(
    registry: &DaRegistry,
    events: &mut Subscription,
    line: &str,
) -> Response {
    match serde_json::from_str::<Command>(line) {
        Ok(command) => execute(registry, events, command).await,
        Err(e) => Response::failure("parse", e),
    }
}

/// Run one command against `registry`.
///
/// `events` is drained by the `events` command.
pub async fn execute(
    registry: &DaRegistry,
    events: &mut Subscription,
    command: Command,
) -> Response {
    debug!(?command, "Executing command");
    match command {
        Command::Submit { caller, request } => unit(
            registry
                .submit(caller, request.data_hash, request.da, request.cid)
                .await,
        ),
        Command::BatchSubmit { caller, requests } => {
            unit(registry.batch_submit(caller, requests).await)
        }
        Command::DelegatedSubmit { submitter, request } => {
            unit(registry.delegated_submit(submitter, request).await)
        }
        Command::BatchDelegatedSubmit {
            submitter,
            requests,
        } => unit(registry.batch_delegated_submit(submitter, requests).await),
        Command::VerifySignature { submitter, request } => {
            let SignedSubmissionRequest { request, signature } = request;
            Response::success(Value::Bool(registry.verify_signature(
                &submitter,
                &request.data_hash,
                &request.da,
                &request.cid,
                &signature,
            )))
        }
        Command::Get {
            submitter,
            data_hash,
            da,
        } => encode_result(registry.get(&submitter, &data_hash, &da)),
        Command::GetAll {
            submitter,
            data_hash,
        } => encode_result(registry.get_all(&submitter, &data_hash)),
        Command::GetDirect {
            submitter,
            data_hash,
            da,
        } => encode(&registry.get_direct(&submitter, &data_hash, &da)),
        Command::GetAllDirect {
            submitter,
            data_hash,
        } => encode(&registry.get_all_direct(&submitter, &data_hash)),
        Command::Extend {
            caller,
            old_address,
        } => unit(registry.extend(caller, old_address).await),
        Command::ExtendedAddresses { submitter } => {
            let addresses: Vec<String> = registry
                .extended_addresses(&submitter)
                .iter()
                .map(|a| to_hex(a))
                .collect();
            encode(&addresses)
        }
        Command::DomainSeparator => Response::success(Value::String(to_hex(
            &registry.domain_separator(),
        ))),
        Command::Eip712Domain => encode(&registry.eip712_domain()),
        Command::SubmitRequestDigest { data_hash, da, cid } => Response::success(Value::String(
            to_hex(&registry.submit_request_digest(&data_hash, &da, &cid)),
        )),
        Command::Events => {
            let drained: Vec<RegistryEvent> = events.drain();
            encode(&drained)
        }
        Command::Metrics => match registry_telemetry::gather_metrics() {
            Ok(text) => Response::success(Value::String(text)),
            Err(e) => Response::failure("metrics", e),
        },
    }
}

fn unit(outcome: Result<(), RegistryError>) -> Response {
    match outcome {
        Ok(()) => Response::success(Value::Null),
        Err(e) => Response::failure(e.kind(), e),
    }
}

fn encode<T: Serialize>(value: &T) -> Response {
    match serde_json::to_value(value) {
        Ok(v) => Response::success(v),
        Err(e) => Response::failure("encoding", e),
    }
}

fn encode_result<T: Serialize>(outcome: Result<T, RegistryError>) -> Response {
    match outcome {
        Ok(value) => encode(&value),
        Err(e) => Response::failure(e.kind(), e),
    }
}
