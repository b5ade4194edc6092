use crate::data::nfc::{
    NfcInstanceRepository, INSTANCE_STATUS_ACTIVATED, INSTANCE_STATUS_PROVISIONED,
    INSTANCE_STATUS_REVOKED,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod activate;
mod count_for_template;
mod insert;
mod max_serial_for_template;
mod revoke;
