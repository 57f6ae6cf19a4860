use std::io;

/// All error types that can occur when talking to a Wiz device.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Address resolution or socket setup failed while opening the client.
    #[error("failed to connect to {addr}: {err}")]
    Connection { addr: String, err: io::Error },

    /// Writing the request datagram failed.
    ///
    /// Methods gated on the device class (`capabilities`, `is_rgb`, `is_tw`,
    /// `is_dw`, `is_scene_available`, `set_scene`) report this wrapped in
    /// [`Error::DeviceTypeUndetermined`].
    #[error("error sending data: {0}")]
    Send(#[source] io::Error),

    /// Reading the reply datagram failed or timed out.
    #[error("error receiving response: {0}")]
    Receive(#[source] io::Error),

    /// Failed to serialize a request to JSON.
    #[error("failed to dump json: {0}")]
    Encoding(serde_json::Error),

    /// The reply was not valid JSON for the expected envelope.
    #[error("failed to load json: {0}")]
    Decoding(serde_json::Error),

    /// A caller-supplied parameter is outside its documented range.
    #[error("{0}")]
    Validation(String),

    /// The scene is not supported by the device's capability class.
    #[error("scene not available: {0}")]
    SceneNotAvailable(u16),

    /// The system configuration query used for capability detection failed.
    ///
    /// The boxed error is the cause, which may be a transport failure such
    /// as [`Error::Send`] or [`Error::Receive`]. Use [`Error::is_timeout`] or
    /// match on the inner error to tell them apart.
    #[error("error figuring out device type: {0}")]
    DeviceTypeUndetermined(#[source] Box<Error>),

    /// The operation has no known wire format.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The device answered with a populated `error` object.
    #[error("device rejected {method} with code {code}: {message}")]
    Device {
        method: String,
        code: i64,
        message: String,
    },

    /// The reply handed back by the transport belongs to a different method.
    ///
    /// [`UdpTransport`](crate::UdpTransport) skips such datagrams, so this
    /// only surfaces from transports that ignore the reply filter.
    #[error("unexpected reply: expected {expected}, got {got}")]
    UnexpectedReply { expected: String, got: String },
}

impl Error {
    /// Create a new connection error
    pub fn connection(addr: &str, err: io::Error) -> Self {
        Error::Connection {
            addr: addr.to_string(),
            err,
        }
    }

    /// Create a new validation error
    pub fn validation(message: &str) -> Self {
        Error::Validation(message.to_string())
    }

    /// Create a new device error from a reply's error object
    pub fn device(method: &str, code: i64, message: &str) -> Self {
        Error::Device {
            method: method.to_string(),
            code,
            message: message.to_string(),
        }
    }

    /// Returns true when the underlying cause is a receive timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Receive(err) => err.kind() == io::ErrorKind::TimedOut,
            Error::DeviceTypeUndetermined(inner) => inner.is_timeout(),
            _ => false,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_detection() {
        let err = Error::Receive(io::Error::new(io::ErrorKind::TimedOut, "receive timeout"));
        assert!(err.is_timeout());

        let wrapped = Error::DeviceTypeUndetermined(Box::new(err));
        assert!(wrapped.is_timeout());

        let other = Error::Send(io::Error::other("boom"));
        assert!(!other.is_timeout());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::SceneNotAvailable(17).to_string(), "scene not available: 17");
        assert_eq!(
            Error::device("setPilot", -32600, "Invalid Request").to_string(),
            "device rejected setPilot with code -32600: Invalid Request"
        );
        assert_eq!(
            Error::NotImplemented("setRhythm").to_string(),
            "setRhythm is not implemented"
        );
    }
}
