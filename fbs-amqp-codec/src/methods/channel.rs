use crate::defines::*;
use crate::field::LongString;

amqp_method! {
    pub struct ChannelOpen("channel.open", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_OPEN) {
        pub reserved_1: String,     // deprecated out-of-band
    }
    synchronous: true,
    responses: [ChannelOpenOk],
}

amqp_method! {
    pub struct ChannelOpenOk("channel.open-ok", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_OPEN_OK) {
        pub reserved_1: LongString, // deprecated channel-id
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct ChannelFlow("channel.flow", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_FLOW) {
        pub active: bool,
    }
    synchronous: true,
    responses: [ChannelFlowOk],
}

amqp_method! {
    pub struct ChannelFlowOk("channel.flow-ok", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_FLOW_OK) {
        pub active: bool,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct ChannelClose("channel.close", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_CLOSE) {
        pub reply_code: u16,
        pub reply_text: String,
        pub class_id: u16,
        pub method_id: u16,
    }
    synchronous: true,
    responses: [ChannelCloseOk],
}

amqp_method! {
    pub struct ChannelCloseOk("channel.close-ok", AMQP_CLASS_CHANNEL, AMQP_METHOD_CHANNEL_CLOSE_OK) {}
    synchronous: false,
    responses: [],
}
