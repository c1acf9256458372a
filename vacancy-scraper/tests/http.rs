use salary_analyzer::{aggregate, VacancySource};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vacancy_scraper::{Error, HeadHunter, SuperJob};

struct Stub {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl Stub {
    /// Request heads received so far, lowercased
    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("Poisoned request log").clone()
    }

    /// Wait until every queued response has been served
    async fn finish(self) -> Vec<String> {
        self.task.await.expect("Stub server panicked");
        self.requests.lock().expect("Poisoned request log").clone()
    }
}

/// Serve the given responses to consecutive connections, one each,
/// recording the request head of every connection.
async fn serve(responses: Vec<(u16, String)>) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = requests.clone();
    let task = tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.expect("Accept failed");
            let mut head = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.expect("Read failed");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            log.lock()
                .expect("Poisoned request log")
                .push(String::from_utf8_lossy(&head).to_lowercase());
            let resp = format!(
                "HTTP/1.1 {} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket
                .write_all(resp.as_bytes())
                .await
                .expect("Write failed");
            let _ = socket.shutdown().await;
        }
    });
    Stub {
        base_url: format!("http://{}", addr),
        requests,
        task,
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("salary-report-test")
        .no_proxy()
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_headhunter_paginates_and_aggregates() {
    let first_page = json!({
        "items": [
            {"id": "1", "name": "Python developer", "salary": {"from": 100000, "to": 150000, "currency": "RUR"}}
        ],
        "found": 3,
        "pages": 2,
        "page": 0,
        "per_page": 2,
    });
    let second_page = json!({
        "items": [
            {"id": "2", "name": "Python developer", "salary": null},
            {"id": "3", "name": "Python developer", "salary": {"from": 3000, "to": null, "currency": "USD"}}
        ],
        "found": 3,
        "pages": 2,
        "page": 1,
        "per_page": 2,
    });
    let stub = serve(vec![
        (200, first_page.to_string()),
        (200, second_page.to_string()),
    ])
    .await;
    let hh = HeadHunter::with_client("hh-token".to_owned(), client())
        .with_base_url(stub.base_url.clone())
        .with_per_page(2);

    let table = aggregate(&hh, &["Python"]).await.expect("Aggregation failed");
    let stats = table.get("Python").expect("Python missing from table");
    assert_eq!(stats.vacancies_found, 3);
    assert_eq!(stats.vacancies_processed, 1);
    assert_eq!(stats.average_salary, 125_000);

    let requests = stub.finish().await;
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("get /vacancies?text="));
    assert!(requests[0].contains("+python&area=1&page=0&per_page=2 "));
    assert!(requests[1].contains("+python&area=1&page=1&per_page=2 "));
    assert!(requests[0].contains("authorization: bearer hh-token"));
    assert!(requests[0].contains("user-agent: salary-report-test"));
}

#[tokio::test]
async fn test_headhunter_stops_on_requested_page_index() {
    // the server keeps echoing page 0, two pages were announced
    let page = json!({
        "items": [
            {"id": "1", "name": "Go developer", "salary": {"from": 1000, "to": null, "currency": "RUR"}}
        ],
        "found": 2,
        "pages": 2,
        "page": 0,
    });
    let stub = serve(vec![
        (200, page.to_string()),
        (200, page.to_string()),
        (200, page.to_string()),
    ])
    .await;
    let hh = HeadHunter::with_client("hh-token".to_owned(), client())
        .with_base_url(stub.base_url.clone());

    let listing = tokio::time::timeout(Duration::from_secs(10), hh.fetch("Go"))
        .await
        .expect("Pagination did not stop")
        .expect("Fetch failed");
    assert_eq!(listing.found, 2);
    assert_eq!(listing.vacancies.len(), 2);

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].contains("&page=0&"));
    assert!(requests[1].contains("&page=1&"));
    stub.task.abort();
}

#[tokio::test]
async fn test_superjob_follows_more_flag() {
    let first_page = json!({
        "objects": [
            {"id": 1, "profession": "C# developer", "payment_from": 100000, "payment_to": 0, "currency": "rub"}
        ],
        "total": 2,
        "more": true,
    });
    let second_page = json!({
        "objects": [
            {"id": 2, "profession": "C# developer", "payment_from": 0, "payment_to": 150000, "currency": "rub"}
        ],
        "total": 2,
        "more": false,
    });
    let stub = serve(vec![
        (200, first_page.to_string()),
        (200, second_page.to_string()),
    ])
    .await;
    let sj = SuperJob::with_client("sj-key".to_owned(), client())
        .with_base_url(stub.base_url.clone());

    let listing = sj.fetch("C#").await.expect("Fetch failed");
    assert_eq!(listing.found, 2);
    assert_eq!(listing.vacancies.len(), 2);

    let requests = stub.finish().await;
    assert!(requests[0]
        .starts_with("get /2.0/vacancies/?keyword=c%23&town=4&catalogues=48&page=0&count=100 "));
    assert!(requests[1].contains("&page=1&count=100 "));
    assert!(requests[0].contains("x-api-app-id: sj-key"));
}

#[tokio::test]
async fn test_error_status_aborts() {
    let stub = serve(vec![(403, json!({"errors": []}).to_string())]).await;
    let hh = HeadHunter::with_client("bad-token".to_owned(), client())
        .with_base_url(stub.base_url.clone());

    let result = aggregate(&hh, &["Java", "Go"]).await;
    match result {
        Err(Error::RequestNotOk { status, url }) => {
            assert_eq!(status.as_u16(), 403);
            assert!(url.contains("/vacancies"), "unexpected url: {}", url);
        }
        other => panic!("Expected RequestNotOk, got {:?}", other),
    }
    let requests = stub.finish().await;
    assert_eq!(requests.len(), 1);
}
