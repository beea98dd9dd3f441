pub type DataChannelId = u16;

/// DataChannelConfig can be used to configure properties of the data channel
/// created for the connection, such as data reliability or a pre-negotiated
/// identity.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#dom-rtcdatachannelinit
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DataChannelConfig {
    /// ordered indicates if data is allowed to be delivered out of order. The
    /// default value of true, guarantees that data will be delivered in order.
    pub ordered: bool,

    /// max_packet_life_time limits the time (in milliseconds) during which the
    /// channel will transmit or retransmit data if not acknowledged.
    pub max_packet_life_time: u16,

    /// max_retransmits limits the number of times a channel will retransmit
    /// data if not successfully delivered.
    pub max_retransmits: u16,

    /// protocol describes the subprotocol name used for this channel.
    pub protocol: String,

    /// negotiated describes if the data channel is announced in-band (false)
    /// or negotiated out-of-band (true), in which case both sides create a
    /// channel with the same id at construction and no announcement is made.
    pub negotiated: bool,

    /// id sets the channel ID when negotiated is true. Ignored when negotiated
    /// is false.
    pub id: DataChannelId,
}
