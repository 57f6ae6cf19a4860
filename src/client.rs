//! Typed operations against a single Wiz device.

use std::net::Ipv4Addr;

use log::{debug, warn};

use crate::capability::Capabilities;
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::payload::{Command, Payload, PulseParams, RegistrationParams, StateParams};
use crate::response::Response;
use crate::transport::{Transport, UdpTransport};
use crate::types::{Brightness, Color, Kelvin, PowerMode, Ratio, Speed, White};

type Result<T> = std::result::Result<T, Error>;

/// A client bound to one Wiz device.
///
/// Every method performs at most one request/reply round trip (`set_scene`
/// performs two: a capability query and the set). Requests on one client are
/// serialized by the transport, so a client may be shared behind an `Arc`.
/// Dropping the client closes its socket.
///
/// # Example
///
/// ```ignore
/// use wiz_udp_client::WizClient;
///
/// let client = WizClient::connect("192.168.1.100", 38899).await?;
/// client.turn_on().await?;
/// client.set_brightness(60).await?;
/// if client.is_scene_available(31).await? {
///     client.set_scene(31).await?;
/// }
/// ```
pub struct WizClient<T = UdpTransport> {
    transport: T,
}

impl WizClient<UdpTransport> {
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        Self::open(&ClientConfig::new(host).with_port(port)).await
    }

    pub async fn open(config: &ClientConfig) -> Result<Self> {
        let transport = UdpTransport::open(config).await?;
        debug!("client connected to {}", transport.peer());
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> WizClient<T> {
    pub fn with_transport(transport: T) -> Self {
        WizClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one command and decode its reply.
    ///
    /// Datagrams answering another method, such as a late reply to a call
    /// that already timed out, are skipped. Fails with [`Error::Device`] when
    /// the device reports an error.
    pub async fn call(&self, command: &Command) -> Result<Response> {
        let method = command.method();
        let msg = command.encode()?;
        debug!("request: {}", String::from_utf8_lossy(&msg));

        let accept = |bytes: &[u8]| Response::answers(bytes, method);
        let bytes = self.transport.exchange(&msg, &accept).await?;
        debug!("response: {}", String::from_utf8_lossy(&bytes));

        Response::decode(&bytes)?.check(method).inspect_err(|e| {
            warn!("{method} failed: {e}");
        })
    }

    /// Current light state: power, color, brightness, scene.
    pub async fn get_pilot(&self) -> Result<Response> {
        self.call(&Command::GetPilot).await
    }

    pub async fn get_system_config(&self) -> Result<Response> {
        self.call(&Command::GetSystemConfig).await
    }

    pub async fn get_user_config(&self) -> Result<Response> {
        self.call(&Command::GetUserConfig).await
    }

    /// Returns model configuration (firmware >= 1.22).
    pub async fn get_model_config(&self) -> Result<Response> {
        self.call(&Command::GetModelConfig).await
    }

    pub async fn get_dev_info(&self) -> Result<Response> {
        self.call(&Command::GetDevInfo).await
    }

    pub async fn turn_on(&self) -> Result<Response> {
        self.set_power(PowerMode::On).await
    }

    pub async fn turn_off(&self) -> Result<Response> {
        self.set_power(PowerMode::Off).await
    }

    pub async fn set_power(&self, power: PowerMode) -> Result<Response> {
        self.call(&Command::SetState(StateParams {
            state: power.state(),
        }))
        .await
    }

    /// Set brightness in percent (10-100).
    pub async fn set_brightness(&self, value: u8) -> Result<Response> {
        let brightness =
            Brightness::create(value).ok_or_else(|| Error::validation(Brightness::RANGE_MESSAGE))?;
        self.set_pilot(Payload::from(&brightness)).await
    }

    pub async fn set_rgb(&self, red: u8, green: u8, blue: u8) -> Result<Response> {
        self.set_color(&Color::rgb(red, green, blue)).await
    }

    pub async fn set_color(&self, color: &Color) -> Result<Response> {
        self.set_pilot(Payload::from(color)).await
    }

    /// Set the cold white LED level (0-255).
    pub async fn set_cold_white(&self, value: u8) -> Result<Response> {
        let mut payload = Payload::new();
        payload.cool(&White::new(value));
        self.set_pilot(payload).await
    }

    /// Set the warm white LED level (0-255).
    pub async fn set_warm_white(&self, value: u8) -> Result<Response> {
        let mut payload = Payload::new();
        payload.warm(&White::new(value));
        self.set_pilot(payload).await
    }

    /// Set color temperature in Kelvin (2000-9000).
    pub async fn set_temperature(&self, kelvin: u16) -> Result<Response> {
        let temp = Kelvin::create(kelvin).ok_or_else(|| Error::validation(Kelvin::RANGE_MESSAGE))?;
        self.set_pilot(Payload::from(&temp)).await
    }

    /// Set how fast a dynamic scene cycles its colors (10-200).
    pub async fn set_speed(&self, value: u8) -> Result<Response> {
        let speed = Speed::create(value).ok_or_else(|| Error::validation(Speed::RANGE_MESSAGE))?;
        self.set_pilot(Payload::from(&speed)).await
    }

    /// Set the up/down light balance of dual-head fixtures (1-100).
    pub async fn set_ratio(&self, value: u8) -> Result<Response> {
        let ratio = Ratio::create(value).ok_or_else(|| Error::validation(Ratio::RANGE_MESSAGE))?;
        self.set_pilot(Payload::from(&ratio)).await
    }

    /// Dip the brightness briefly so the bulb can be found.
    pub async fn pulse(&self) -> Result<Response> {
        self.call(&Command::Pulse(PulseParams::LOCATE)).await
    }

    /// Ask the device to start (or stop) pushing `syncPilot` heartbeats to
    /// `phone_ip`. This client does not listen for them.
    pub async fn registration(
        &self,
        phone_ip: Ipv4Addr,
        phone_mac: &str,
        register: bool,
    ) -> Result<Response> {
        self.call(&Command::Registration(RegistrationParams {
            phone_ip,
            phone_mac: phone_mac.to_string(),
            register,
        }))
        .await
    }

    /// Detect the device class with a single `getSystemConfig` query.
    ///
    /// Any failure of that query, transport errors included, is wrapped in
    /// [`Error::DeviceTypeUndetermined`]. The same holds for the `is_*`
    /// helpers, [`is_scene_available`](Self::is_scene_available) and
    /// [`set_scene`](Self::set_scene), which start with this query.
    pub async fn capabilities(&self) -> Result<Capabilities> {
        let resp = self
            .get_system_config()
            .await
            .map_err(|e| Error::DeviceTypeUndetermined(Box::new(e)))?;

        let module_name = resp.module_name().unwrap_or_else(|| {
            warn!("system config carries no moduleName");
            ""
        });
        let caps = Capabilities::from_module_name(module_name);
        debug!("capabilities of {}: {:?}", module_name, caps.classes());
        Ok(caps)
    }

    /// Full color plus cool and warm white LEDs.
    pub async fn is_rgb(&self) -> Result<bool> {
        Ok(self.capabilities().await?.rgb)
    }

    /// Cool and warm white LEDs only.
    pub async fn is_tw(&self) -> Result<bool> {
        Ok(self.capabilities().await?.tw)
    }

    /// A single dimmable white channel.
    pub async fn is_dw(&self) -> Result<bool> {
        Ok(self.capabilities().await?.dw)
    }

    pub async fn is_scene_available(&self, scene_id: u16) -> Result<bool> {
        Ok(self.capabilities().await?.supports_scene(scene_id))
    }

    /// Set a scene after checking the device class supports it.
    ///
    /// A write failure during the check surfaces as
    /// `DeviceTypeUndetermined(Send(..))`, not `Send(..)`.
    pub async fn set_scene(&self, scene_id: u16) -> Result<Response> {
        if !self.is_scene_available(scene_id).await? {
            return Err(Error::SceneNotAvailable(scene_id));
        }

        let mut payload = Payload::new();
        payload.scene_id(scene_id);
        self.set_pilot(payload).await
    }

    /// Rhythms are not supported: their wire format is unknown.
    pub async fn set_rhythm(&self, rhythm_id: u16) -> Result<Response> {
        debug!("refusing to set rhythm {rhythm_id}");
        Err(Error::NotImplemented("setRhythm"))
    }

    async fn set_pilot(&self, payload: Payload) -> Result<Response> {
        self.call(&Command::SetPilot(payload)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;

    use serde_json::{Value, json};

    /// Records every request and replays queued replies, skipping those the
    /// caller rejects. When the queue runs out it answers `{"success": true}`
    /// for the method it was sent.
    #[derive(Default)]
    struct MockTransport {
        replies: Mutex<VecDeque<Result<Vec<u8>>>>,
        sent: Mutex<Vec<Value>>,
        fail_send: bool,
    }

    impl MockTransport {
        fn failing_send() -> Self {
            MockTransport {
                fail_send: true,
                ..Default::default()
            }
        }

        fn with_reply(self, reply: Value) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(serde_json::to_vec(&reply).unwrap()));
            self
        }

        fn with_raw_reply(self, reply: &[u8]) -> Self {
            self.replies.lock().unwrap().push_back(Ok(reply.to_vec()));
            self
        }

        fn with_module(self, module_name: &str) -> Self {
            self.with_reply(json!({
                "method": "getSystemConfig",
                "env": "pro",
                "result": {"mac": "a8bb50aabbcc", "moduleName": module_name, "fwVersion": "1.25.0"}
            }))
        }

        fn sent(&self) -> Vec<Value> {
            self.sent.lock().unwrap().clone()
        }

        fn methods(&self) -> Vec<String> {
            self.sent()
                .iter()
                .map(|m| m["method"].as_str().unwrap().to_string())
                .collect()
        }
    }

    impl Transport for MockTransport {
        async fn exchange(
            &self,
            payload: &[u8],
            accept: &(dyn Fn(&[u8]) -> bool + Sync),
        ) -> Result<Vec<u8>> {
            if self.fail_send {
                return Err(Error::Send(io::Error::new(
                    io::ErrorKind::NetworkUnreachable,
                    "network is unreachable",
                )));
            }

            let request: Value = serde_json::from_slice(payload).unwrap();
            let method = request["method"].clone();
            self.sent.lock().unwrap().push(request);

            let mut replies = self.replies.lock().unwrap();
            while let Some(reply) = replies.pop_front() {
                match reply {
                    Ok(bytes) if !accept(&bytes) => continue,
                    other => return other,
                }
            }
            Ok(serde_json::to_vec(&json!({
                "method": method,
                "env": "pro",
                "result": {"success": true}
            }))
            .unwrap())
        }
    }

    fn client(mock: MockTransport) -> WizClient<MockTransport> {
        WizClient::with_transport(mock)
    }

    fn last_params(client: &WizClient<MockTransport>) -> Value {
        client.transport().sent().last().unwrap()["params"].clone()
    }

    fn assert_validation(result: Result<Response>) {
        assert!(matches!(result, Err(Error::Validation(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_turn_on_off() {
        let client = client(MockTransport::default());
        client.turn_on().await.unwrap();
        assert_eq!(last_params(&client), json!({"state": true}));
        client.turn_off().await.unwrap();
        assert_eq!(last_params(&client), json!({"state": false}));
        assert_eq!(client.transport().methods(), ["setState", "setState"]);
    }

    #[tokio::test]
    async fn test_brightness_bounds() {
        let client = client(MockTransport::default());
        client.set_brightness(10).await.unwrap();
        assert_eq!(last_params(&client), json!({"dimming": 10}));
        client.set_brightness(100).await.unwrap();
        assert_eq!(last_params(&client), json!({"dimming": 100}));

        assert_validation(client.set_brightness(9).await);
        assert_validation(client.set_brightness(101).await);
        assert_eq!(client.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_temperature_bounds() {
        let client = client(MockTransport::default());
        client.set_temperature(2000).await.unwrap();
        assert_eq!(last_params(&client), json!({"temp": 2000}));
        client.set_temperature(9000).await.unwrap();

        assert_validation(client.set_temperature(1999).await);
        assert_validation(client.set_temperature(9001).await);
        assert_eq!(client.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_speed_bounds() {
        let client = client(MockTransport::default());
        client.set_speed(10).await.unwrap();
        client.set_speed(200).await.unwrap();
        assert_eq!(last_params(&client), json!({"speed": 200}));

        assert_validation(client.set_speed(9).await);
        assert_validation(client.set_speed(201).await);
        assert_eq!(client.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_ratio_bounds() {
        let client = client(MockTransport::default());
        client.set_ratio(1).await.unwrap();
        assert_eq!(last_params(&client), json!({"ratio": 1}));
        client.set_ratio(100).await.unwrap();

        assert_validation(client.set_ratio(0).await);
        assert_validation(client.set_ratio(101).await);
        assert_eq!(client.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_rgb_and_white_channels() {
        let client = client(MockTransport::default());
        client.set_rgb(0, 0, 0).await.unwrap();
        assert_eq!(last_params(&client), json!({"r": 0, "g": 0, "b": 0}));
        client.set_rgb(255, 255, 255).await.unwrap();
        assert_eq!(last_params(&client), json!({"r": 255, "g": 255, "b": 255}));

        client.set_cold_white(255).await.unwrap();
        assert_eq!(last_params(&client), json!({"c": 255}));
        client.set_warm_white(0).await.unwrap();
        assert_eq!(last_params(&client), json!({"w": 0}));

        assert!(Color::try_from((-1, 0, 0)).is_err());
        assert!(Color::try_from((0, 256, 0)).is_err());
        assert!(White::try_from(256).is_err());
    }

    #[tokio::test]
    async fn test_pulse_and_registration() {
        let client = client(MockTransport::default());
        client.pulse().await.unwrap();
        assert_eq!(last_params(&client), json!({"delta": -100, "duration": 300}));

        client
            .registration(Ipv4Addr::new(192, 168, 1, 10), "AABBCCDDEEFF", true)
            .await
            .unwrap();
        assert_eq!(
            last_params(&client),
            json!({"phoneIp": "192.168.1.10", "phoneMac": "AABBCCDDEEFF", "register": true})
        );
        assert_eq!(client.transport().methods(), ["pulse", "registration"]);
    }

    #[tokio::test]
    async fn test_queries_send_no_params() {
        let client = client(MockTransport::default());
        client.get_pilot().await.unwrap();
        client.get_system_config().await.unwrap();
        client.get_user_config().await.unwrap();
        client.get_model_config().await.unwrap();
        client.get_dev_info().await.unwrap();

        let sent = client.transport().sent();
        assert!(sent.iter().all(|m| m.get("params").is_none() && m["id"] == 1));
        assert_eq!(
            client.transport().methods(),
            [
                "getPilot",
                "getSystemConfig",
                "getUserConfig",
                "getModelConfig",
                "getDevInfo"
            ]
        );
    }

    #[tokio::test]
    async fn test_get_pilot_decodes_result() {
        let client = client(MockTransport::default().with_reply(json!({
            "method": "getPilot",
            "env": "pro",
            "result": {"mac": "a8bb50aabbcc", "rssi": -55, "state": true, "sceneId": 12, "temp": 4200, "dimming": 40}
        })));
        let pilot = client.get_pilot().await.unwrap();
        assert_eq!(pilot.result.rssi, Some(-55));
        assert_eq!(pilot.result.temp, Some(4200));
        assert_eq!(pilot.result.scene(), Some(crate::SceneMode::Daylight));
        assert!(pilot.result.r.is_none());
    }

    #[tokio::test]
    async fn test_scene_available_on_rgb() {
        let client = client(
            MockTransport::default()
                .with_module("ESP01_SHRGB1C_31")
                .with_module("ESP01_SHRGB1C_31"),
        );
        assert!(client.is_scene_available(31).await.unwrap());
        assert_eq!(client.transport().methods(), ["getSystemConfig"]);

        assert!(!client.is_scene_available(9999).await.unwrap());
        assert_eq!(
            client.transport().methods(),
            ["getSystemConfig", "getSystemConfig"]
        );
    }

    #[tokio::test]
    async fn test_scene_available_on_dw() {
        let client = client(
            MockTransport::default()
                .with_module("ESP01_DW1_01")
                .with_module("ESP01_DW1_01"),
        );
        assert!(client.is_scene_available(9).await.unwrap());
        assert!(!client.is_scene_available(17).await.unwrap());
        assert_eq!(client.transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn test_scene_unavailable_without_class() {
        let client = client(MockTransport::default().with_module("ESP10_SOCKET_06"));
        assert!(!client.is_scene_available(9).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_scene() {
        let client = client(MockTransport::default().with_module("ESP01_SHTW1C_31"));
        client.set_scene(6).await.unwrap();
        assert_eq!(client.transport().methods(), ["getSystemConfig", "setPilot"]);
        assert_eq!(last_params(&client), json!({"sceneId": 6}));
    }

    #[tokio::test]
    async fn test_set_scene_rejected() {
        let client = client(MockTransport::default().with_module("ESP01_SHTW1C_31"));
        let err = client.set_scene(17).await.unwrap_err();
        assert_eq!(err, Error::SceneNotAvailable(17));
        assert_eq!(client.transport().methods(), ["getSystemConfig"]);
    }

    #[tokio::test]
    async fn test_capability_query_failure() {
        let client = client(MockTransport::default().with_raw_reply(b"{garbage"));
        let err = client.set_scene(1).await.unwrap_err();
        match err {
            Error::DeviceTypeUndetermined(inner) => assert!(matches!(*inner, Error::Decoding(_))),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_class_helpers() {
        let client = client(
            MockTransport::default()
                .with_module("ESP03_SHTW1C_01")
                .with_module("ESP03_SHTW1C_01")
                .with_module("ESP03_SHTW1C_01"),
        );
        assert!(!client.is_rgb().await.unwrap());
        assert!(client.is_tw().await.unwrap());
        assert!(!client.is_dw().await.unwrap());
    }

    #[tokio::test]
    async fn test_rhythm_not_implemented() {
        let client = client(MockTransport::default());
        let err = client.set_rhythm(1).await.unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_device_error_surfaced() {
        let client = client(MockTransport::default().with_reply(json!({
            "method": "setPilot",
            "id": 1,
            "env": "pro",
            "error": {"code": -32602, "message": "Invalid params"}
        })));
        let err = client.set_speed(100).await.unwrap_err();
        assert_eq!(err, Error::device("setPilot", -32602, "Invalid params"));
    }

    #[tokio::test]
    async fn test_reply_for_other_method_skipped() {
        let client = client(
            MockTransport::default()
                .with_reply(json!({
                    "method": "syncPilot",
                    "env": "pro",
                    "params": {"state": true}
                }))
                .with_reply(json!({
                    "method": "getPilot",
                    "env": "pro",
                    "result": {"rssi": -40}
                })),
        );
        let pilot = client.get_pilot().await.unwrap();
        assert_eq!(pilot.method, "getPilot");
        assert_eq!(pilot.result.rssi, Some(-40));
    }

    #[tokio::test]
    async fn test_send_failure_everywhere() {
        let client = client(MockTransport::failing_send());
        let is_send = |r: Result<Response>| matches!(r, Err(Error::Send(_)));

        assert!(is_send(client.get_pilot().await));
        assert!(is_send(client.get_system_config().await));
        assert!(is_send(client.get_user_config().await));
        assert!(is_send(client.get_model_config().await));
        assert!(is_send(client.get_dev_info().await));
        assert!(is_send(client.turn_on().await));
        assert!(is_send(client.turn_off().await));
        assert!(is_send(client.set_brightness(50).await));
        assert!(is_send(client.set_rgb(1, 2, 3).await));
        assert!(is_send(client.set_cold_white(5).await));
        assert!(is_send(client.set_warm_white(5).await));
        assert!(is_send(client.set_temperature(3000).await));
        assert!(is_send(client.set_speed(50).await));
        assert!(is_send(client.set_ratio(50).await));
        assert!(is_send(client.pulse().await));
        assert!(is_send(
            client
                .registration(Ipv4Addr::LOCALHOST, "AABBCCDDEEFF", false)
                .await
        ));

        // Capability checks wrap the transport failure.
        let wrapped_send = |err: Error| match err {
            Error::DeviceTypeUndetermined(inner) => matches!(*inner, Error::Send(_)),
            _ => false,
        };
        assert!(wrapped_send(client.set_scene(1).await.unwrap_err()));
        assert!(wrapped_send(client.is_scene_available(1).await.unwrap_err()));
        assert!(wrapped_send(client.capabilities().await.unwrap_err()));
        assert!(wrapped_send(client.is_rgb().await.unwrap_err()));
        assert!(wrapped_send(client.is_tw().await.unwrap_err()));
        assert!(wrapped_send(client.is_dw().await.unwrap_err()));
        assert!(client.transport().sent().is_empty());
    }

    #[cfg(feature = "runtime-tokio")]
    #[tokio::test]
    async fn test_concurrent_calls_get_their_own_reply() {
        use std::sync::Arc;
        use std::time::Duration;

        let device = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = device.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            for _ in 0..4 {
                let (n, from) = device.recv_from(&mut buf).await.unwrap();
                let request: Value = serde_json::from_slice(&buf[..n]).unwrap();
                tokio::time::sleep(Duration::from_millis(10)).await;
                let reply = json!({"method": request["method"], "env": "pro", "result": {"success": true}});
                device
                    .send_to(&serde_json::to_vec(&reply).unwrap(), from)
                    .await
                    .unwrap();
            }
        });

        let config = ClientConfig::new("127.0.0.1").with_port(port);
        let client = Arc::new(WizClient::open(&config).await.unwrap());

        let (a, b, c, d) = tokio::join!(
            client.get_pilot(),
            client.get_dev_info(),
            client.turn_on(),
            client.get_user_config()
        );
        assert_eq!(a.unwrap().method, "getPilot");
        assert_eq!(b.unwrap().method, "getDevInfo");
        assert_eq!(c.unwrap().method, "setState");
        assert_eq!(d.unwrap().method, "getUserConfig");
        server.await.unwrap();
    }

    /// A loopback device that answers the `n`th request with `rssi: -n`,
    /// holding back the first answer by `first_delay`.
    #[cfg(feature = "runtime-tokio")]
    async fn slow_first_device(
        requests: usize,
        first_delay: std::time::Duration,
    ) -> (tokio::task::JoinHandle<()>, u16) {
        let device = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = device.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            for n in 1..=requests {
                let (len, from) = device.recv_from(&mut buf).await.unwrap();
                let request: Value = serde_json::from_slice(&buf[..len]).unwrap();
                if n == 1 {
                    tokio::time::sleep(first_delay).await;
                }
                let reply = json!({"method": request["method"], "env": "pro", "result": {"rssi": -(n as i64)}});
                device
                    .send_to(&serde_json::to_vec(&reply).unwrap(), from)
                    .await
                    .unwrap();
            }
        });
        (server, port)
    }

    #[cfg(feature = "runtime-tokio")]
    #[tokio::test]
    async fn test_late_reply_does_not_shift_later_calls() {
        use std::time::Duration;

        let (server, port) = slow_first_device(4, Duration::from_millis(150)).await;
        let config = ClientConfig::new("127.0.0.1")
            .with_port(port)
            .with_read_timeout(Duration::from_millis(100));
        let client = WizClient::open(&config).await.unwrap();

        let err = client.get_pilot().await.unwrap_err();
        assert!(err.is_timeout());

        let info = client.get_dev_info().await.unwrap();
        assert_eq!(info.method, "getDevInfo");
        assert_eq!(info.result.rssi, Some(-2));

        let state = client.turn_on().await.unwrap();
        assert_eq!(state.method, "setState");
        assert_eq!(state.result.rssi, Some(-3));

        let user = client.get_user_config().await.unwrap();
        assert_eq!(user.method, "getUserConfig");
        assert_eq!(user.result.rssi, Some(-4));
        server.await.unwrap();
    }

    #[cfg(feature = "runtime-tokio")]
    #[tokio::test]
    async fn test_late_reply_to_same_method_is_dropped() {
        use std::time::Duration;

        let (server, port) = slow_first_device(2, Duration::from_millis(150)).await;
        let config = ClientConfig::new("127.0.0.1")
            .with_port(port)
            .with_read_timeout(Duration::from_millis(100));
        let client = WizClient::open(&config).await.unwrap();

        assert!(client.get_pilot().await.unwrap_err().is_timeout());
        // Let the late answer land before asking again.
        tokio::time::sleep(Duration::from_millis(150)).await;

        let pilot = client.get_pilot().await.unwrap();
        assert_eq!(pilot.result.rssi, Some(-2));
        server.await.unwrap();
    }
}
