//! Record types for the Systembolaget assortment documents.
//!
//! Every leaf is kept as the raw text the service delivered: prices keep
//! their decimal comma, article numbers keep leading zeros, dates stay as
//! written. Missing elements decode to empty strings. Typed views over these
//! fields live in [`crate::typed`].
//!
//! The serde names are the XML tag names, so serializing a record set with
//! quick-xml yields a document [`crate::parse`] decodes back to equal values.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Article catalog (`Assortment.aspx?Format=Xml`)
// ---------------------------------------------------------------------------

/// The full article catalog: `<artiklar>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "artiklar")]
pub struct Articles {
    /// Document creation timestamp, verbatim.
    #[serde(rename = "skapad-tid", skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(rename = "info")]
    pub info: ArticlesInfo,
    /// Articles in document order. Duplicate ids are kept.
    #[serde(rename = "artikel")]
    pub articles: Vec<Article>,
}

/// `<info>` block of the article catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticlesInfo {
    #[serde(rename = "meddelande", skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// One catalog line item (a specific product variant).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    #[serde(rename = "nr", skip_serializing_if = "String::is_empty")]
    pub number: String,
    /// Unique per article.
    #[serde(rename = "Artikelid", skip_serializing_if = "String::is_empty")]
    pub article_id: String,
    /// Shared by every variant of the same product (e.g. vintages).
    #[serde(rename = "Varnummer", skip_serializing_if = "String::is_empty")]
    pub product_number: String,
    #[serde(rename = "Namn", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "Namn2", skip_serializing_if = "String::is_empty")]
    pub sub_name: String,
    /// Price including VAT.
    #[serde(rename = "Prisinklmoms", skip_serializing_if = "String::is_empty")]
    pub price: String,
    #[serde(rename = "Volymiml", skip_serializing_if = "String::is_empty")]
    pub volume_ml: String,
    #[serde(rename = "PrisPerLiter", skip_serializing_if = "String::is_empty")]
    pub price_per_litre: String,
    #[serde(rename = "Saljstart", skip_serializing_if = "String::is_empty")]
    pub sold_since: String,
    #[serde(rename = "Slutlev", skip_serializing_if = "String::is_empty")]
    pub discontinued_since: String,
    #[serde(rename = "Varugrupp", skip_serializing_if = "String::is_empty")]
    pub product_group: String,
    #[serde(rename = "Forpackning", skip_serializing_if = "String::is_empty")]
    pub container_type: String,
    #[serde(rename = "Forslutning", skip_serializing_if = "String::is_empty")]
    pub sealing_type: String,
    #[serde(rename = "Ursprung", skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(rename = "Ursprunglandnamn", skip_serializing_if = "String::is_empty")]
    pub origin_country: String,
    #[serde(rename = "Producent", skip_serializing_if = "String::is_empty")]
    pub producer: String,
    #[serde(rename = "Leverantor", skip_serializing_if = "String::is_empty")]
    pub distributor: String,
    #[serde(rename = "Argang", skip_serializing_if = "String::is_empty")]
    pub vintage: String,
    #[serde(rename = "Provadargang", skip_serializing_if = "String::is_empty")]
    pub tested_vintage: String,
    #[serde(rename = "Alkoholhalt", skip_serializing_if = "String::is_empty")]
    pub alcohol_percentage: String,
    #[serde(rename = "Sortiment", skip_serializing_if = "String::is_empty")]
    pub assortment: String,
    #[serde(rename = "Ekologisk", skip_serializing_if = "String::is_empty")]
    pub organic: String,
    #[serde(rename = "Koscher", skip_serializing_if = "String::is_empty")]
    pub kosher: String,
    #[serde(rename = "RavarorBeskrivning", skip_serializing_if = "String::is_empty")]
    pub raw_materials: String,
}

// ---------------------------------------------------------------------------
// Store directory (`Assortment.aspx?butikerombud=1`)
// ---------------------------------------------------------------------------

/// The store and agent directory: `<ButikerOmbud>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "ButikerOmbud")]
pub struct Stores {
    #[serde(rename = "Info")]
    pub info: StoresInfo,
    /// Stores and agents in document order.
    #[serde(rename = "ButikOmbud")]
    pub stores: Vec<Store>,
}

/// `<Info>` block of the store directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoresInfo {
    #[serde(rename = "Meddelande", skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// A store or agent (`ButikOmbud`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Store {
    #[serde(rename = "Nr", skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(rename = "Typ", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(rename = "Address1", skip_serializing_if = "String::is_empty")]
    pub address1: String,
    #[serde(rename = "Address2", skip_serializing_if = "String::is_empty")]
    pub address2: String,
    #[serde(rename = "Address3", skip_serializing_if = "String::is_empty")]
    pub address3: String,
    #[serde(rename = "Address4", skip_serializing_if = "String::is_empty")]
    pub address4: String,
    #[serde(rename = "Address5", skip_serializing_if = "String::is_empty")]
    pub address5: String,
    #[serde(rename = "Telefon", skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(rename = "ButiksTyp", skip_serializing_if = "String::is_empty")]
    pub store_type: String,
    #[serde(rename = "Tjanster", skip_serializing_if = "String::is_empty")]
    pub services: String,
    #[serde(rename = "SokOrd", skip_serializing_if = "String::is_empty")]
    pub search_words: String,
    #[serde(rename = "Oppettider", skip_serializing_if = "String::is_empty")]
    pub opening_hours: String,
    /// RT90 grid coordinates, verbatim.
    #[serde(rename = "RT90x", skip_serializing_if = "String::is_empty")]
    pub rt90_x: String,
    #[serde(rename = "RT90y", skip_serializing_if = "String::is_empty")]
    pub rt90_y: String,
}
