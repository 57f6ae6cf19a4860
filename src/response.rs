//! Replies received from Wiz devices.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::payload::Method;
use crate::types::{Color, SceneMode};

type Result<T> = std::result::Result<T, Error>;

/// The envelope of every reply.
///
/// Which `result` fields are populated depends on the query that was issued;
/// a `None` field means "not part of this reply", never a zero value.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub method: String,
    pub id: Option<u32>,
    pub env: Option<String>,
    #[serde(default)]
    pub result: ResultFields,
    pub error: Option<DeviceError>,
}

/// Error object a device attaches when it rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeSet {
    pub mode: Option<Vec<i64>>,
}

/// Union of the fields returned by the different queries.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFields {
    // Present on most replies
    pub mac: Option<String>,
    pub src: Option<String>,
    pub success: Option<bool>,

    // getPilot
    pub rssi: Option<i32>,
    pub state: Option<bool>,
    pub scene_id: Option<u16>,
    pub schd_pset_id: Option<u16>,
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    pub c: Option<u8>,
    pub w: Option<u8>,
    pub dimming: Option<u8>,
    pub temp: Option<u16>,
    pub speed: Option<u8>,
    pub ratio: Option<u8>,

    // getDevInfo
    pub dev_mac: Option<String>,

    // getUserConfig
    pub fade_in: Option<i64>,
    pub fade_out: Option<i64>,
    pub dft_dim: Option<i64>,
    pub op_mode: Option<i64>,
    pub po: Option<bool>,
    pub min_dimming: Option<i64>,
    pub tap_sensor: Option<i64>,
    pub white_range: Option<Vec<f64>>,

    // getSystemConfig
    pub home_id: Option<i64>,
    pub room_id: Option<i64>,
    pub rgn: Option<String>,
    pub module_name: Option<String>,
    pub fw_version: Option<String>,
    pub group_id: Option<i64>,
    pub type_id: Option<i64>,
    pub ping: Option<i64>,
    pub drv_conf: Option<Vec<i64>>,

    // getModelConfig
    pub ps: Option<i64>,
    pub pwm_freq: Option<i64>,
    pub pwm_range: Option<Vec<i64>>,
    pub wcr: Option<i64>,
    pub nowc: Option<i64>,
    pub cct_range: Option<Vec<i64>>,
    pub ext_range: Option<Vec<i64>>,
    pub render_factor: Option<Vec<f64>>,
    pub wizc1: Option<ModeSet>,
    pub wizc2: Option<ModeSet>,
}

impl ResultFields {
    pub fn color(&self) -> Option<Color> {
        match (self.r, self.g, self.b) {
            (Some(r), Some(g), Some(b)) => Some(Color::rgb(r, g, b)),
            _ => None,
        }
    }

    /// The running scene, if the reply names one from the catalog.
    pub fn scene(&self) -> Option<SceneMode> {
        self.scene_id.and_then(SceneMode::create)
    }
}

impl Response {
    /// Parse a raw reply datagram.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::Decoding)
    }

    /// Whether a raw datagram is a reply to `method`.
    ///
    /// Datagrams that are not a JSON envelope count as replies, so decoding
    /// them reports the problem.
    pub fn answers(bytes: &[u8], method: Method) -> bool {
        #[derive(Deserialize)]
        struct Envelope {
            method: String,
        }

        serde_json::from_slice::<Envelope>(bytes)
            .map(|envelope| envelope.method == method.as_ref())
            .unwrap_or(true)
    }

    /// Ensure the reply belongs to `expected` and carries no device error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::{Error, Method, Response};
    ///
    /// let reply = br#"{"method":"setPilot","env":"pro","error":{"code":-32602,"message":"Invalid params"}}"#;
    /// let err = Response::decode(reply).unwrap().check(Method::SetPilot).unwrap_err();
    /// assert!(matches!(err, Error::Device { code: -32602, .. }));
    /// ```
    pub fn check(self, expected: Method) -> Result<Self> {
        if self.method != expected.as_ref() {
            return Err(Error::UnexpectedReply {
                expected: expected.to_string(),
                got: self.method,
            });
        }
        if let Some(err) = &self.error
            && err.code != 0
        {
            return Err(Error::device(&self.method, err.code, &err.message));
        }
        Ok(self)
    }

    pub fn module_name(&self) -> Option<&str> {
        self.result.module_name.as_deref()
    }
}
