/// Describes a single STUN or TURN server available to the endpoint's ICE
/// agent.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#rtciceserver-dictionary)
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct IceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: String,
}
