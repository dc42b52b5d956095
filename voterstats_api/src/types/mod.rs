mod meta;
pub use self::meta::{ApiError, ApiErrorBody, ApiMeta, ApiResponse, DatasetMeta, UNKNOWN};

mod florida;
pub use self::florida::{
    FloridaApiResponse, FloridaCountyRegistration, FloridaPartyTotals, FloridaRegistration,
    FloridaSourceMeta,
};

mod national;
pub use self::national::{
    NationalApiResponse, NationalDemographicRow, NationalPartyId, NationalSourceMeta,
};
