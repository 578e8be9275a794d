//! End-to-end tests for the shapeshift invocation pipeline.
//!
//! These tests drive the full resolve -> format -> sign -> dispatch flow
//! against an in-memory transport; no network access is required.

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use shapeshift_auth::SignedRequest;
use shapeshift_client::{Api, Transport, TransportError, TransportResponse};
use shapeshift_model::Catalog;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The fixed clock every deterministic assertion is computed against.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
}

/// Reference access key used across the signing assertions.
pub const TEST_ACCESS_KEY: &str = "AKIDEXAMPLE";

/// Reference secret key used across the signing assertions.
pub const TEST_SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";

/// A multi-protocol definition document covering the fixture services.
pub const DEFINITION: &str = r#"{
    "demoservice": {
        "2020-06-15": {
            "metadata": {
                "protocol": "query",
                "endpointPrefix": "demoservice",
                "apiVersion": "2020-06-15",
                "signatureVersion": "v4"
            },
            "endpoints": {"endpoints": {"us-east-1": {}}}
        },
        "2021-01-01": {
            "metadata": {
                "protocol": "query",
                "endpointPrefix": "demoservice",
                "apiVersion": "2021-01-01",
                "signatureVersion": "v4"
            },
            "endpoints": {"endpoints": {"us-east-1": {}, "eu-west-1": {}}},
            "shapes": {
                "CreateThingInput": {
                    "type": "structure",
                    "required": ["ThingName", "Tags"],
                    "members": {
                        "ThingName": {"shape": "ThingName"},
                        "Tags": {"shape": "TagList"},
                        "Comment": {"shape": "Comment"}
                    }
                },
                "ThingName": {"type": "string", "enum": ["widget", "gadget"]},
                "Comment": {"type": "string"},
                "TagList": {"type": "list", "member": {"shape": "Tag"}},
                "Tag": {
                    "type": "structure",
                    "required": ["Key", "Value"],
                    "members": {
                        "Key": {"shape": "TagKey"},
                        "Value": {"shape": "TagValue"}
                    }
                },
                "TagKey": {"type": "string", "min": 2},
                "TagValue": {"type": "string", "min": 1}
            },
            "operations": {
                "DescribeThing": {
                    "name": "DescribeThing",
                    "http": {"method": "POST", "requestUri": "/"}
                },
                "CreateThing": {
                    "name": "CreateThing",
                    "http": {"method": "POST", "requestUri": "/"},
                    "input": {"shape": "CreateThingInput"}
                }
            }
        }
    },
    "demojson": {
        "2021-01-01": {
            "metadata": {
                "protocol": "json",
                "endpointPrefix": "demoservice",
                "apiVersion": "2021-01-01",
                "jsonVersion": "1.1",
                "targetPrefix": "DemoService_20210101",
                "signingName": "demoservice",
                "signatureVersion": "v4"
            },
            "endpoints": {"endpoints": {"us-east-1": {}}},
            "shapes": {
                "GetThingInput": {
                    "type": "structure",
                    "required": ["ThingId"],
                    "members": {"ThingId": {"shape": "ThingId"}}
                },
                "ThingId": {"type": "string", "pattern": "^t-[0-9a-f]{8}$"}
            },
            "operations": {
                "DescribeThing": {
                    "name": "DescribeThing",
                    "http": {"method": "POST", "requestUri": "/"}
                },
                "GetThing": {
                    "name": "GetThing",
                    "http": {"method": "POST", "requestUri": "/"},
                    "input": {"shape": "GetThingInput"}
                }
            }
        }
    },
    "demorest": {
        "2021-01-01": {
            "metadata": {
                "protocol": "rest-json",
                "endpointPrefix": "demoservice",
                "apiVersion": "2021-01-01",
                "signatureVersion": "v4"
            },
            "endpoints": {"endpoints": {"us-east-1": {}}},
            "operations": {
                "GetThing": {
                    "name": "GetThing",
                    "http": {"method": "GET", "requestUri": "/things/{thingId}"}
                }
            }
        }
    },
    "globalsvc": {
        "2021-01-01": {
            "metadata": {
                "protocol": "query",
                "endpointPrefix": "globalsvc",
                "apiVersion": "2021-01-01",
                "signatureVersion": "v4"
            },
            "endpoints": {
                "endpoints": {
                    "aws-global": {
                        "hostname": "globalsvc.amazonaws.com",
                        "credentialScope": {"region": "us-east-1"}
                    }
                }
            },
            "operations": {
                "Ping": {
                    "name": "Ping",
                    "http": {"method": "POST", "requestUri": "/"}
                }
            }
        }
    },
    "legacysvc": {
        "2010-01-01": {
            "metadata": {
                "protocol": "query",
                "endpointPrefix": "legacysvc",
                "apiVersion": "2010-01-01",
                "signatureVersion": "v2"
            },
            "endpoints": {"endpoints": {"us-east-1": {}}}
        }
    }
}"#;

/// Load the fixture catalog.
#[must_use]
pub fn catalog() -> Catalog {
    init_tracing();
    Catalog::from_slice(DEFINITION.as_bytes()).expect("fixture definition parses")
}

/// Bind one fixture service.
#[must_use]
pub fn api(service: &str) -> Api {
    Api::new(catalog().service(service).expect("fixture service exists"))
}

/// Transport double: records every signed request and answers with a canned
/// response.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<SignedRequest>>,
}

impl RecordingTransport {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests dispatched so far.
    #[must_use]
    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().expect("recorder lock").clone()
    }

    /// The single dispatched request, panicking when there is not exactly one.
    #[must_use]
    pub fn only_request(&self) -> SignedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one dispatch");
        requests.into_iter().next().expect("one request")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &SignedRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .expect("recorder lock")
            .push(request.clone());
        Ok(TransportResponse {
            status: 200,
            headers: http::HeaderMap::new(),
            body: bytes::Bytes::from_static(b"{}"),
        })
    }
}

mod test_catalog;
mod test_invoke;
mod test_protocols;
