//! AWS Glue
//!
//! Data Catalog databases and tables, ETL job runs and crawlers.

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_core::{Optional, Paginator, Timestamp};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// Glue endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "glue",
    endpoint_prefix: "glue",
    signing_name: "glue",
    protocol: Protocol::AwsJson1_1,
    target: "AWSGlue",
    global_region: None,
};

// ---- shared shapes ----

/// Definition of a database to create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseInput {
    pub name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub description: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub location_uri: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub parameters: Optional<HashMap<String, String>>,
}

/// A Data Catalog database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Database {
    pub name: Optional<String>,
    pub description: Optional<String>,
    pub location_uri: Optional<String>,
    pub parameters: Optional<HashMap<String, String>>,
    pub create_time: Optional<Timestamp>,
    pub catalog_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Column {
    pub name: Optional<String>,
    pub r#type: Optional<String>,
    pub comment: Optional<String>,
    pub parameters: Optional<HashMap<String, String>>,
}

/// Physical storage of a table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageDescriptor {
    pub columns: Optional<Vec<Column>>,
    pub location: Optional<String>,
    pub input_format: Optional<String>,
    pub output_format: Optional<String>,
    pub compressed: Optional<bool>,
    pub number_of_buckets: Optional<i32>,
    pub parameters: Optional<HashMap<String, String>>,
}

/// A Data Catalog table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Table {
    pub name: Optional<String>,
    pub database_name: Optional<String>,
    pub description: Optional<String>,
    pub owner: Optional<String>,
    pub create_time: Optional<Timestamp>,
    pub update_time: Optional<Timestamp>,
    pub retention: Optional<i32>,
    pub storage_descriptor: Optional<StorageDescriptor>,
    pub partition_keys: Optional<Vec<Column>>,
    pub table_type: Optional<String>,
    pub parameters: Optional<HashMap<String, String>>,
    pub catalog_id: Optional<String>,
}

/// One run of an ETL job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobRun {
    pub id: Optional<String>,
    pub attempt: Optional<i32>,
    pub previous_run_id: Optional<String>,
    pub trigger_name: Optional<String>,
    pub job_name: Optional<String>,
    pub started_on: Optional<Timestamp>,
    pub last_modified_on: Optional<Timestamp>,
    pub completed_on: Optional<Timestamp>,
    /// `STARTING`, `RUNNING`, `STOPPING`, `STOPPED`, `SUCCEEDED`, `FAILED`,
    /// `TIMEOUT`, `ERROR`, `WAITING` or `EXPIRED`.
    pub job_run_state: Optional<String>,
    pub arguments: Optional<HashMap<String, String>>,
    pub error_message: Optional<String>,
    pub timeout: Optional<i32>,
    pub max_capacity: Optional<f64>,
    pub worker_type: Optional<String>,
    pub number_of_workers: Optional<i32>,
    pub execution_time: Optional<i32>,
    pub glue_version: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LastCrawlInfo {
    pub status: Optional<String>,
    pub error_message: Optional<String>,
    pub log_group: Optional<String>,
    pub start_time: Optional<Timestamp>,
}

/// A crawler definition and its last run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Crawler {
    pub name: Optional<String>,
    pub role: Optional<String>,
    pub database_name: Optional<String>,
    pub description: Optional<String>,
    pub classifiers: Optional<Vec<String>>,
    /// `READY`, `RUNNING` or `STOPPING`.
    pub state: Optional<String>,
    pub table_prefix: Optional<String>,
    pub crawl_elapsed_time: Optional<i64>,
    pub creation_time: Optional<Timestamp>,
    pub last_updated: Optional<Timestamp>,
    pub last_crawl: Optional<LastCrawlInfo>,
    pub version: Optional<i64>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatabaseRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    pub database_input: DatabaseInput,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabaseRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabasesRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
    /// `FOREIGN` or `ALL`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub resource_share_type: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDatabaseRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetTableRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    pub database_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetTablesRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub catalog_id: Optional<String>,
    pub database_name: String,
    /// Regular expression on table names.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub expression: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRunRequest {
    pub job_name: String,
    /// Id of a previous run to retry.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub job_run_id: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub arguments: Optional<HashMap<String, String>>,
    /// Minutes.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub timeout: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_capacity: Optional<f64>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub worker_type: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub number_of_workers: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunRequest {
    pub job_name: String,
    pub run_id: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub predecessors_included: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunsRequest {
    pub job_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct StartCrawlerRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetCrawlerRequest {
    pub name: String,
}

request_builders!(
    DatabaseInput => DatabaseInputBuilder,
    CreateDatabaseRequest => CreateDatabaseRequestBuilder,
    GetDatabaseRequest => GetDatabaseRequestBuilder,
    GetDatabasesRequest => GetDatabasesRequestBuilder,
    DeleteDatabaseRequest => DeleteDatabaseRequestBuilder,
    GetTableRequest => GetTableRequestBuilder,
    GetTablesRequest => GetTablesRequestBuilder,
    StartJobRunRequest => StartJobRunRequestBuilder,
    GetJobRunRequest => GetJobRunRequestBuilder,
    GetJobRunsRequest => GetJobRunsRequestBuilder,
    StartCrawlerRequest => StartCrawlerRequestBuilder,
    GetCrawlerRequest => GetCrawlerRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateDatabaseResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDatabaseResponse {
    pub database: Optional<Database>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDatabasesResponse {
    pub database_list: Optional<Vec<Database>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteDatabaseResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTableResponse {
    pub table: Optional<Table>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTablesResponse {
    pub table_list: Optional<Vec<Table>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartJobRunResponse {
    pub job_run_id: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetJobRunResponse {
    pub job_run: Optional<JobRun>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetJobRunsResponse {
    pub job_runs: Optional<Vec<JobRun>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StartCrawlerResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCrawlerResponse {
    pub crawler: Optional<Crawler>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, CreateDatabase: CreateDatabaseRequest => CreateDatabaseResponse);
operation!(SERVICE, GetDatabase: GetDatabaseRequest => GetDatabaseResponse);
operation!(SERVICE, GetDatabases: GetDatabasesRequest => GetDatabasesResponse);
operation!(SERVICE, DeleteDatabase: DeleteDatabaseRequest => DeleteDatabaseResponse);
operation!(SERVICE, GetTable: GetTableRequest => GetTableResponse);
operation!(SERVICE, GetTables: GetTablesRequest => GetTablesResponse);
operation!(SERVICE, StartJobRun: StartJobRunRequest => StartJobRunResponse);
operation!(SERVICE, GetJobRun: GetJobRunRequest => GetJobRunResponse);
operation!(SERVICE, GetJobRuns: GetJobRunsRequest => GetJobRunsResponse);
operation!(SERVICE, StartCrawler: StartCrawlerRequest => StartCrawlerResponse);
operation!(SERVICE, GetCrawler: GetCrawlerRequest => GetCrawlerResponse);

paginated!(GetDatabasesRequest, next_token => next_token);
paginated!(GetTablesRequest, next_token => next_token);
paginated!(GetJobRunsRequest, next_token => next_token);

// ---- exceptions ----

/// A specified entity does not exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntityNotFoundException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
    #[serde(rename = "FromFederationSource")]
    pub from_federation_source: Optional<bool>,
}

/// A resource to be created or added already exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlreadyExistsException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The input provided was not valid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidInputException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
    #[serde(rename = "FromFederationSource")]
    pub from_federation_source: Optional<bool>,
}

/// Too many jobs are being run concurrently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConcurrentRunsExceededException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The crawler is already running.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrawlerRunningException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The operation timed out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationTimeoutException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// Glue API resource.
#[derive(Debug, Clone)]
pub struct Glue {
    dispatch: Dispatch,
}

impl Glue {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub async fn create_database(&self, request: CreateDatabaseRequest) -> Result<CreateDatabaseResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_database(&self, request: GetDatabaseRequest) -> Result<GetDatabaseResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_databases(&self, request: GetDatabasesRequest) -> Result<GetDatabasesResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_databases_pages(&self, request: GetDatabasesRequest) -> Paginator<GetDatabasesResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn delete_database(&self, request: DeleteDatabaseRequest) -> Result<DeleteDatabaseResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_table(&self, request: GetTableRequest) -> Result<GetTableResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_tables(&self, request: GetTablesRequest) -> Result<GetTablesResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_tables_pages(&self, request: GetTablesRequest) -> Paginator<GetTablesResponse, Error> {
        self.dispatch.paginate(request)
    }

    /// Start a run of a job. The returned id identifies the run in
    /// [`get_job_run`](Self::get_job_run).
    pub async fn start_job_run(&self, request: StartJobRunRequest) -> Result<StartJobRunResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_job_run(&self, request: GetJobRunRequest) -> Result<GetJobRunResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_job_runs(&self, request: GetJobRunsRequest) -> Result<GetJobRunsResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_job_runs_pages(&self, request: GetJobRunsRequest) -> Paginator<GetJobRunsResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn start_crawler(&self, request: StartCrawlerRequest) -> Result<StartCrawlerResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_crawler(&self, request: GetCrawlerRequest) -> Result<GetCrawlerResponse> {
        self.dispatch.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use crate::services::testing::{assert_required_only, decode_every_field};

    #[test]
    fn test_requests_with_required_fields_only() {
        let input = DatabaseInput::builder().name("sales").build().unwrap();
        assert_required_only(&input, &["Name"]);
        assert_required_only(
            &CreateDatabaseRequest::builder().database_input(input).build().unwrap(),
            &["DatabaseInput"],
        );
        assert_required_only(&GetDatabaseRequest::builder().name("sales").build().unwrap(), &["Name"]);
        assert_required_only(&GetDatabasesRequest::builder().build().unwrap(), &[]);
        assert_required_only(&DeleteDatabaseRequest::builder().name("sales").build().unwrap(), &["Name"]);
        assert_required_only(
            &GetTableRequest::builder().database_name("sales").name("orders").build().unwrap(),
            &["DatabaseName", "Name"],
        );
        assert_required_only(
            &GetTablesRequest::builder().database_name("sales").build().unwrap(),
            &["DatabaseName"],
        );
        assert_required_only(&StartJobRunRequest::builder().job_name("etl").build().unwrap(), &["JobName"]);
        assert_required_only(
            &GetJobRunRequest::builder().job_name("etl").run_id("jr_1").build().unwrap(),
            &["JobName", "RunId"],
        );
        assert_required_only(&GetJobRunsRequest::builder().job_name("etl").build().unwrap(), &["JobName"]);
        assert_required_only(&StartCrawlerRequest::builder().name("daily").build().unwrap(), &["Name"]);
        assert_required_only(&GetCrawlerRequest::builder().name("daily").build().unwrap(), &["Name"]);
    }

    fn full_database() -> serde_json::Value {
        json!({
            "Name": "sales",
            "Description": "Sales data",
            "LocationUri": "s3://bucket/sales",
            "Parameters": {"owner": "finance"},
            "CreateTime": 1700000000,
            "CatalogId": "123456789012"
        })
    }

    fn full_column(name: &str) -> serde_json::Value {
        json!({"Name": name, "Type": "string", "Comment": "c", "Parameters": {"k": "v"}})
    }

    fn full_table() -> serde_json::Value {
        json!({
            "Name": "orders",
            "DatabaseName": "sales",
            "Description": "Orders",
            "Owner": "etl",
            "CreateTime": 1700000000,
            "UpdateTime": 1700000100.25,
            "Retention": 0,
            "StorageDescriptor": {
                "Columns": [full_column("id")],
                "Location": "s3://bucket/orders",
                "InputFormat": "org.apache.hadoop.mapred.TextInputFormat",
                "OutputFormat": "org.apache.hadoop.hive.ql.io.HiveIgnoreKeyTextOutputFormat",
                "Compressed": false,
                "NumberOfBuckets": -1,
                "Parameters": {"classification": "csv"}
            },
            "PartitionKeys": [full_column("dt")],
            "TableType": "EXTERNAL_TABLE",
            "Parameters": {"EXTERNAL": "TRUE"},
            "CatalogId": "123456789012"
        })
    }

    fn full_job_run() -> serde_json::Value {
        json!({
            "Id": "jr_2",
            "Attempt": 1,
            "PreviousRunId": "jr_1",
            "TriggerName": "nightly",
            "JobName": "etl",
            "StartedOn": 1700000000,
            "LastModifiedOn": 1700000060,
            "CompletedOn": 1700000120,
            "JobRunState": "FAILED",
            "Arguments": {"--day": "2023-11-14"},
            "ErrorMessage": "out of memory",
            "Timeout": 2880,
            "MaxCapacity": 10.0,
            "WorkerType": "G.1X",
            "NumberOfWorkers": 10,
            "ExecutionTime": 120,
            "GlueVersion": "4.0"
        })
    }

    #[test]
    fn test_responses_decode_every_field() {
        decode_every_field::<CreateDatabaseResponse>(json!({}));
        decode_every_field::<DeleteDatabaseResponse>(json!({}));
        decode_every_field::<StartCrawlerResponse>(json!({}));

        let database = decode_every_field::<GetDatabaseResponse>(json!({"Database": full_database()}));
        assert_eq!(
            database.database.get().and_then(|d| d.parameters.get()).and_then(|p| p.get("owner")),
            Some(&"finance".to_string())
        );
        decode_every_field::<GetDatabasesResponse>(json!({"DatabaseList": [full_database()], "NextToken": "t"}));

        let table = decode_every_field::<GetTableResponse>(json!({"Table": full_table()}));
        let update = table.table.get().and_then(|t| t.update_time.get()).unwrap();
        assert_eq!(update.0.timestamp_subsec_millis(), 250);
        decode_every_field::<GetTablesResponse>(json!({"TableList": [full_table()], "NextToken": "t"}));

        decode_every_field::<StartJobRunResponse>(json!({"JobRunId": "jr_2"}));
        decode_every_field::<GetJobRunResponse>(json!({"JobRun": full_job_run()}));
        decode_every_field::<GetJobRunsResponse>(json!({"JobRuns": [full_job_run()], "NextToken": "t"}));

        let crawler = decode_every_field::<GetCrawlerResponse>(json!({
            "Crawler": {
                "Name": "daily",
                "Role": "arn:aws:iam::123456789012:role/crawler",
                "DatabaseName": "sales",
                "Description": "Daily crawl",
                "Classifiers": ["csv"],
                "State": "READY",
                "TablePrefix": "raw_",
                "CrawlElapsedTime": 0,
                "CreationTime": 1700000000,
                "LastUpdated": 1700000500,
                "LastCrawl": {
                    "Status": "SUCCEEDED",
                    "ErrorMessage": "",
                    "LogGroup": "/aws-glue/crawlers",
                    "StartTime": 1700000400
                },
                "Version": 3
            }
        }));
        assert_eq!(crawler.crawler.get().and_then(|c| c.version.get().copied()), Some(3));

        decode_every_field::<EntityNotFoundException>(json!({"message": "m", "FromFederationSource": false}));
        decode_every_field::<AlreadyExistsException>(json!({"Message": "m"}));
        decode_every_field::<InvalidInputException>(json!({"message": "m", "FromFederationSource": true}));
        decode_every_field::<ConcurrentRunsExceededException>(json!({"message": "m"}));
        decode_every_field::<CrawlerRunningException>(json!({"message": "m"}));
        decode_every_field::<OperationTimeoutException>(json!({"message": "m"}));
    }

    #[test]
    fn test_create_database_nests_input() {
        let request = CreateDatabaseRequest::builder()
            .database_input(DatabaseInput::builder().name("sales").build().unwrap())
            .build()
            .unwrap();

        assert!(request.catalog_id.is_unset());
        assert!(request.database_input.description.is_unset());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"DatabaseInput": {"Name": "sales"}})
        );
    }

    #[test]
    fn test_get_tables_required_only() {
        let request = GetTablesRequest::builder().database_name("sales").build().unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"DatabaseName": "sales"}));
        assert_eq!(<GetTablesRequest as Operation>::NAME, "GetTables");
    }

    #[test]
    fn test_get_table_response_decodes_all_fields() {
        let payload = json!({
            "Table": {
                "Name": "orders",
                "DatabaseName": "sales",
                "Description": "raw orders",
                "Owner": "etl",
                "CreateTime": 1_700_000_000,
                "UpdateTime": 1_700_000_100.5,
                "Retention": 0,
                "StorageDescriptor": {
                    "Columns": [{"Name": "id", "Type": "bigint", "Comment": "pk"}],
                    "Location": "s3://bucket/orders/",
                    "InputFormat": "parquet-in",
                    "OutputFormat": "parquet-out",
                    "Compressed": false,
                    "NumberOfBuckets": -1
                },
                "PartitionKeys": [{"Name": "dt", "Type": "string"}],
                "TableType": "EXTERNAL_TABLE",
                "Parameters": {"classification": "parquet"},
                "CatalogId": "123456789012"
            }
        });
        let response: GetTableResponse = serde_json::from_value(payload).unwrap();
        let table = response.table.into_option().unwrap();

        assert_eq!(table.name, Optional::Present("orders".to_string()));
        assert_eq!(table.database_name, Optional::Present("sales".to_string()));
        assert_eq!(table.owner, Optional::Present("etl".to_string()));
        assert_eq!(
            table.create_time.get().map(|t| t.epoch_seconds()),
            Some(1_700_000_000.0)
        );
        assert_eq!(
            table.update_time.get().map(|t| t.epoch_seconds()),
            Some(1_700_000_100.5)
        );
        let storage = table.storage_descriptor.into_option().unwrap();
        let columns = storage.columns.into_option().unwrap();
        assert_eq!(columns[0].r#type, Optional::Present("bigint".to_string()));
        assert_eq!(storage.compressed, Optional::Present(false));
        assert_eq!(storage.number_of_buckets, Optional::Present(-1));
        assert_eq!(table.table_type, Optional::Present("EXTERNAL_TABLE".to_string()));
        assert_eq!(table.catalog_id, Optional::Present("123456789012".to_string()));
    }

    #[test]
    fn test_job_run_state() {
        let response: GetJobRunResponse = serde_json::from_value(json!({
            "JobRun": {"Id": "jr_1", "JobName": "nightly", "JobRunState": "SUCCEEDED", "ExecutionTime": 42}
        }))
        .unwrap();
        let run = response.job_run.into_option().unwrap();
        assert_eq!(run.job_run_state.as_deref(), Some("SUCCEEDED"));
        assert_eq!(run.execution_time, Optional::Present(42));
        assert!(run.error_message.is_unset());
    }

    #[test]
    fn test_entity_not_found_details() {
        let err = Error::from_response(
            "glue",
            "GetDatabase",
            400,
            &http::HeaderMap::new(),
            br#"{"__type":"EntityNotFoundException","Message":"Database sales not found."}"#,
        );
        let service = err.as_service_error().unwrap();
        assert!(service.is("EntityNotFoundException"));
        let details: EntityNotFoundException = service.details().unwrap();
        assert_eq!(details.message.as_deref(), Some("Database sales not found."));
    }
}
