use crate::defines::*;

amqp_method! {
    pub struct TxSelect("tx.select", AMQP_CLASS_TX, AMQP_METHOD_TX_SELECT) {}
    synchronous: true,
    responses: [TxSelectOk],
}

amqp_method! {
    pub struct TxSelectOk("tx.select-ok", AMQP_CLASS_TX, AMQP_METHOD_TX_SELECT_OK) {}
    synchronous: false,
    responses: [],
}

amqp_method! {
    pub struct TxCommit("tx.commit", AMQP_CLASS_TX, AMQP_METHOD_TX_COMMIT) {}
    synchronous: true,
    responses: [TxCommitOk],
}

amqp_method! {
    pub struct TxCommitOk("tx.commit-ok", AMQP_CLASS_TX, AMQP_METHOD_TX_COMMIT_OK) {}
    synchronous: false,
    responses: [],
}
