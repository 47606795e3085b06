// Product API fixture - handler types documented with I/O Docs attributes
use iodocs::prelude::*;

#[path("/ping")]
pub struct PingApi;

impl PingApi {
    #[get]
    #[descriptions("Check that the API is active")]
    pub fn ping(&self, request: Request) {}
}

pub struct QueryApi;

#[path("/query")]
impl QueryApi {
    #[get]
    #[path("/resource")]
    #[iodocs_name("queryName")]
    #[description("Run a query")]
    pub fn query(
        &self,
        #[description("Param1 does something")]
        #[query_param("param1")]
        #[iodocs_required]
        #[iodocs_default_integer(2)]
        param1: i32,
        #[query_param("paramIgnore")]
        #[iodocs_ignore]
        param_ignore: i32,
        #[description("Param2 does something")]
        #[query_param("param2")]
        #[iodocs_default_boolean(true)]
        param2: bool,
        #[header_param("Accept")] accept: String,
    ) {
    }

    #[get]
    #[path("/this-should-not-be-included")]
    #[iodocs_ignore]
    pub fn query_everything(&self) {}

    pub fn helper(&self) -> usize {
        0
    }
}

#[path("/enum")]
impl EnumApi {
    #[get]
    pub fn query(
        &self,
        #[query_param("enum")]
        #[iodocs_enum("a", "b")]
        #[iodocs_enum_descriptions("Letter a", "Letter b")]
        enumeration: bool,
    ) {
    }
}

#[path("/enum-mismatch")]
impl EnumMismatch {
    #[get]
    pub fn query(
        &self,
        #[query_param("Enum mismatch")]
        #[iodocs_enum("a", "b")]
        #[iodocs_enum_descriptions("a", "b", "c")]
        enum_mismatch: String,
    ) {
    }
}

#[path("/path/:pathParam")]
impl PathApi {
    #[get]
    pub fn query(&self, #[path_param("pathParam")] path_param: String) {}
}

#[path("/resource")]
impl HeaderApi {
    #[get]
    pub fn query(&self, #[header_param("Accept")] accept: String) {}
}

#[path("/resource")]
impl PutBodyApi {
    #[put]
    pub fn create(&self, body_data: String) {}
}
