use crate::defines::*;

amqp_method! {
    /// Puts the channel into publisher confirm mode (RabbitMQ extension).
    pub struct ConfirmSelect("confirm.select", AMQP_CLASS_CONFIRM, AMQP_METHOD_CONFIRM_SELECT) {
        pub no_wait: bool,
    }
    synchronous: true,
    responses: [ConfirmSelectOk],
    no_wait: no_wait,
}

amqp_method! {
    pub struct ConfirmSelectOk("confirm.select-ok", AMQP_CLASS_CONFIRM, AMQP_METHOD_CONFIRM_SELECT_OK) {}
    synchronous: false,
    responses: [],
}
