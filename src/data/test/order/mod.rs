use crate::{
    data::billing::order::ShopOrderRepository,
    model::billing::{ORDER_STATUS_PAID, ORDER_STATUS_PENDING, ORDER_STATUS_REFUNDED},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_session_id;
mod get_paginated;
mod revenue_by_product;
mod set_status;
