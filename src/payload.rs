//! Outbound messages for Wiz devices.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::errors::Error;
use crate::types::{Brightness, Color, Kelvin, Ratio, SceneMode, Speed, White};

type Result<T> = std::result::Result<T, Error>;

/// Protocol id sent with every request. Replies are not correlated by id.
pub const REQUEST_ID: u32 = 1;

/// Methods understood by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Method {
    GetPilot,
    GetSystemConfig,
    GetUserConfig,
    GetModelConfig,
    GetDevInfo,
    SetState,
    SetPilot,
    Pulse,
    Registration,
}

/// Attributes accepted by `setPilot`.
///
/// Only the fields that were set are serialized; the device rejects
/// messages with keys it does not expect, so each constructor sets exactly
/// the keys for one operation.
///
/// # Examples
///
/// ```
/// use wiz_udp_client::{Payload, SceneMode};
///
/// let payload = Payload::from(&SceneMode::Sunset);
/// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"sceneId":3}"#);
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Payload {
    pub(crate) state: Option<bool>,
    #[serde(rename = "sceneId")]
    pub(crate) scene: Option<u16>,
    pub(crate) dimming: Option<u8>,
    pub(crate) speed: Option<u8>,
    pub(crate) temp: Option<u16>,
    pub(crate) ratio: Option<u8>,
    #[serde(rename = "r")]
    pub(crate) red: Option<u8>,
    #[serde(rename = "g")]
    pub(crate) green: Option<u8>,
    #[serde(rename = "b")]
    pub(crate) blue: Option<u8>,
    #[serde(rename = "c")]
    pub(crate) cool: Option<u8>,
    #[serde(rename = "w")]
    pub(crate) warm: Option<u8>,
}

impl Payload {
    /// Create a new empty payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Payload;
    ///
    /// let payload = Payload::new();
    /// assert_eq!(payload.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this payload contains at least one attribute the device acts on.
    ///
    /// Speed and ratio alone only tune the running scene, but the device
    /// still accepts them.
    pub fn is_valid(&self) -> bool {
        self.state.is_some()
            || self.scene.is_some()
            || self.dimming.is_some()
            || self.temp.is_some()
            || self.speed.is_some()
            || self.ratio.is_some()
            || (self.red.is_some() && self.green.is_some() && self.blue.is_some())
            || self.cool.is_some()
            || self.warm.is_some()
    }

    /// Set a scene by raw ID. Availability is checked by the client, not here.
    pub fn scene_id(&mut self, id: u16) {
        self.scene = Some(id);
    }

    pub fn scene(&mut self, scene: &SceneMode) {
        self.scene_id(scene.id());
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.dimming = Some(brightness.value);
    }

    pub fn speed(&mut self, speed: &Speed) {
        self.speed = Some(speed.value);
    }

    pub fn temp(&mut self, temp: &Kelvin) {
        self.temp = Some(temp.kelvin);
    }

    pub fn ratio(&mut self, ratio: &Ratio) {
        self.ratio = Some(ratio.value);
    }

    /// Set the RGB color.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::{Color, Payload};
    ///
    /// let mut payload = Payload::new();
    /// payload.color(&Color::rgb(255, 0, 10));
    /// assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"r":255,"g":0,"b":10}"#);
    /// ```
    pub fn color(&mut self, color: &Color) {
        self.red = Some(color.red);
        self.green = Some(color.green);
        self.blue = Some(color.blue);
    }

    /// Set the cool white LED intensity.
    pub fn cool(&mut self, cool: &White) {
        self.cool = Some(cool.value);
    }

    /// Set the warm white LED intensity.
    pub fn warm(&mut self, warm: &White) {
        self.warm = Some(warm.value);
    }
}

impl From<&SceneMode> for Payload {
    fn from(scene: &SceneMode) -> Self {
        let mut p = Payload::new();
        p.scene(scene);
        p
    }
}

impl From<&Kelvin> for Payload {
    fn from(kelvin: &Kelvin) -> Self {
        let mut p = Payload::new();
        p.temp(kelvin);
        p
    }
}

impl From<&Color> for Payload {
    fn from(color: &Color) -> Self {
        let mut p = Payload::new();
        p.color(color);
        p
    }
}

impl From<&Speed> for Payload {
    fn from(speed: &Speed) -> Self {
        let mut p = Payload::new();
        p.speed(speed);
        p
    }
}

impl From<&Brightness> for Payload {
    fn from(brightness: &Brightness) -> Self {
        let mut p = Payload::new();
        p.brightness(brightness);
        p
    }
}

impl From<&Ratio> for Payload {
    fn from(ratio: &Ratio) -> Self {
        let mut p = Payload::new();
        p.ratio(ratio);
        p
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StateParams {
    pub state: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PulseParams {
    pub delta: i16,
    pub duration: u16,
}

impl PulseParams {
    pub const LOCATE: PulseParams = PulseParams {
        delta: -100,
        duration: 300,
    };
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationParams {
    pub phone_ip: Ipv4Addr,
    pub phone_mac: String,
    pub register: bool,
}

/// A request to a device: the method together with the parameters that
/// method accepts, so a method can never be sent with another's keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GetPilot,
    GetSystemConfig,
    GetUserConfig,
    GetModelConfig,
    GetDevInfo,
    SetState(StateParams),
    SetPilot(Payload),
    Pulse(PulseParams),
    Registration(RegistrationParams),
}

/// Borrowed params, serialized without a tag.
#[derive(Serialize)]
#[serde(untagged)]
enum Params<'a> {
    State(&'a StateParams),
    Pilot(&'a Payload),
    Pulse(&'a PulseParams),
    Registration(&'a RegistrationParams),
}

#[derive(Serialize)]
struct Envelope<'a> {
    method: Method,
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Params<'a>>,
}

impl Command {
    pub fn method(&self) -> Method {
        match self {
            Command::GetPilot => Method::GetPilot,
            Command::GetSystemConfig => Method::GetSystemConfig,
            Command::GetUserConfig => Method::GetUserConfig,
            Command::GetModelConfig => Method::GetModelConfig,
            Command::GetDevInfo => Method::GetDevInfo,
            Command::SetState(_) => Method::SetState,
            Command::SetPilot(_) => Method::SetPilot,
            Command::Pulse(_) => Method::Pulse,
            Command::Registration(_) => Method::Registration,
        }
    }

    fn params(&self) -> Option<Params<'_>> {
        match self {
            Command::SetState(p) => Some(Params::State(p)),
            Command::SetPilot(p) => Some(Params::Pilot(p)),
            Command::Pulse(p) => Some(Params::Pulse(p)),
            Command::Registration(p) => Some(Params::Registration(p)),
            _ => None,
        }
    }

    /// Serialize into the datagram sent to the device.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Command;
    ///
    /// let bytes = Command::GetPilot.encode().unwrap();
    /// assert_eq!(bytes, br#"{"method":"getPilot","id":1}"#);
    /// ```
    pub fn encode(&self) -> Result<Vec<u8>> {
        if let Command::SetPilot(payload) = self
            && !payload.is_valid()
        {
            return Err(Error::validation("invalid payload; no attributes set"));
        }

        serde_json::to_vec(&Envelope {
            method: self.method(),
            id: REQUEST_ID,
            params: self.params(),
        })
        .map_err(Error::Encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn encoded(command: &Command) -> Value {
        serde_json::from_slice(&command.encode().unwrap()).unwrap()
    }

    #[test]
    fn test_set_state_round_trip() {
        let value = encoded(&Command::SetState(StateParams { state: true }));
        assert_eq!(value["method"], "setState");
        assert_eq!(value["params"], json!({"state": true}));
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_queries_omit_params() {
        for command in [
            Command::GetPilot,
            Command::GetSystemConfig,
            Command::GetUserConfig,
            Command::GetModelConfig,
            Command::GetDevInfo,
        ] {
            let value = encoded(&command);
            assert_eq!(value["method"], command.method().as_ref());
            assert!(value.get("params").is_none());
        }
    }

    #[test]
    fn test_pulse_params() {
        let value = encoded(&Command::Pulse(PulseParams::LOCATE));
        assert_eq!(value["params"], json!({"delta": -100, "duration": 300}));
    }

    #[test]
    fn test_registration_params() {
        let value = encoded(&Command::Registration(RegistrationParams {
            phone_ip: Ipv4Addr::new(192, 168, 1, 2),
            phone_mac: "AABBCCDDEEFF".to_string(),
            register: false,
        }));
        assert_eq!(
            value["params"],
            json!({"phoneIp": "192.168.1.2", "phoneMac": "AABBCCDDEEFF", "register": false})
        );
    }

    #[test]
    fn test_pilot_only_sets_given_keys() {
        let value = encoded(&Command::SetPilot(Payload::from(&Kelvin::create(4000).unwrap())));
        assert_eq!(value["params"], json!({"temp": 4000}));

        let mut payload = Payload::new();
        payload.warm(&White::new(0));
        let value = encoded(&Command::SetPilot(payload));
        assert_eq!(value["params"], json!({"w": 0}));
    }

    #[test]
    fn test_empty_pilot_rejected() {
        let err = Command::SetPilot(Payload::new()).encode().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::GetSystemConfig.to_string(), "getSystemConfig");
        assert_eq!("getDevInfo".parse::<Method>().unwrap(), Method::GetDevInfo);
        assert_eq!(
            serde_json::to_value(Method::SetPilot).unwrap(),
            json!("setPilot")
        );
    }
}
