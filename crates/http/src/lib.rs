mod reqwest_client;

use std::future::Future;

pub use reqwest_client::ReqwestClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}
