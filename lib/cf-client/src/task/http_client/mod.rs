use crate::api_client::ApiClient;

pub mod dto;
mod provider;


pub struct HTTPTaskClient {
    api_client: ApiClient,
}

impl HTTPTaskClient {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }
}
