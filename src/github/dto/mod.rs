pub mod pull_request_dto;
pub mod pull_request_filter_dto;
