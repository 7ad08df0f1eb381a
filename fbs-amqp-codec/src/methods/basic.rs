use crate::defines::*;
use crate::table::FieldTable;

amqp_method! {
    pub struct BasicQos("basic.qos", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_QOS) {
        pub prefetch_size: u32,
        pub prefetch_count: u16,
        pub global: bool,
    }
    synchronous: true,
    responses: [BasicQosOk],
}

amqp_method! {
    pub struct BasicQosOk("basic.qos-ok", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_QOS_OK) {}
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct BasicConsume("basic.consume", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_CONSUME) {
        pub reserved_1: u16,
        pub queue: String,
        pub consumer_tag: String,
        pub no_local: bool,
        pub no_ack: bool,
        pub exclusive: bool,
        pub no_wait: bool,
        pub arguments: FieldTable,
    }
    synchronous: true,
    responses: [BasicConsumeOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct BasicConsumeOk("basic.consume-ok", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_CONSUME_OK) {
        pub consumer_tag: String,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    /// Ends a consumer. With `no_wait` set the broker sends no cancel-ok.
    pub struct BasicCancel("basic.cancel", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_CANCEL) {
        pub consumer_tag: String,
        pub no_wait: bool,
    }
    synchronous: true,
    responses: [BasicCancelOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct BasicCancelOk("basic.cancel-ok", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_CANCEL_OK) {
        pub consumer_tag: String,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct BasicPublish("basic.publish", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_PUBLISH) {
        pub reserved_1: u16,
        pub exchange: String,
        pub routing_key: String,
        pub mandatory: bool,
        pub immediate: bool,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct BasicDeliver("basic.deliver", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_DELIVER) {
        pub consumer_tag: String,
        pub delivery_tag: u64,
        pub redelivered: bool,
        pub exchange: String,
        pub routing_key: String,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct BasicAck("basic.ack", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_ACK) {
        pub delivery_tag: u64,
        /// Acknowledge everything up to and including `delivery_tag`.
        pub multiple: bool,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct BasicReject("basic.reject", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_REJECT) {
        pub delivery_tag: u64,
        pub requeue: bool,
    }
    synchronous: false,
    responses: [],
}

amqp_method! {
    /// RabbitMQ extension.
    pub struct BasicNack("basic.nack", AMQP_CLASS_BASIC, AMQP_METHOD_BASIC_NACK) {
        pub delivery_tag: u64,
        pub multiple: bool,
        pub requeue: bool,
    }
    synchronous: false,
    responses: [],
}
