//! XML decoding for the assortment documents.
//!
//! Documents are read event by event with quick-xml's [`Reader`], so a body
//! can be decoded while it is still arriving from the network. Text is never
//! trimmed: a field holds exactly the characters between its tags, after
//! entity unescaping. Unknown elements are skipped, absent elements stay
//! empty, and when a record repeats an element the last occurrence wins.
//!
//! An empty body is rejected: it is not a document, even when the service
//! answered 304.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tokio::io::AsyncBufRead;

use crate::error::{CatalogError, DecodeFailure};
use crate::types::{Article, Articles, Store, Stores};

/// Decodes an article catalog document.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if `xml` is empty, malformed or truncated.
pub fn parse_articles(xml: &[u8]) -> Result<Articles, CatalogError> {
    decode_document(xml)
}

/// Decodes a store directory document.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if `xml` is empty, malformed or truncated.
pub fn parse_stores(xml: &[u8]) -> Result<Stores, CatalogError> {
    decode_document(xml)
}

// ---------------------------------------------------------------------------
// Document shapes
// ---------------------------------------------------------------------------

/// A document the event decoder can fill in: a root element holding a few
/// header fields and a repeated record element.
pub(crate) trait Document: Default {
    type Record: Default;

    /// Label used in errors and log events.
    const CONTEXT: &'static str;

    /// Tag of the record element directly below the root.
    const RECORD_TAG: &'static [u8];

    /// Slot for a leaf element directly below a record.
    fn record_field<'a>(record: &'a mut Self::Record, tag: &[u8]) -> Option<&'a mut String>;

    /// Slot for an element outside the records. `path` starts below the root.
    fn header_field(&mut self, path: &[Vec<u8>]) -> Option<&mut String>;

    /// Slot for an attribute of the root element.
    fn root_attribute(&mut self, _key: &[u8]) -> Option<&mut String> {
        None
    }

    fn push_record(&mut self, record: Self::Record);

    fn record_count(&self) -> usize;
}

impl Document for Articles {
    type Record = Article;

    const CONTEXT: &'static str = "article catalog";
    const RECORD_TAG: &'static [u8] = b"artikel";

    fn record_field<'a>(article: &'a mut Article, tag: &[u8]) -> Option<&'a mut String> {
        let slot = match tag {
            b"nr" => &mut article.number,
            b"Artikelid" => &mut article.article_id,
            b"Varnummer" => &mut article.product_number,
            b"Namn" => &mut article.name,
            b"Namn2" => &mut article.sub_name,
            b"Prisinklmoms" => &mut article.price,
            b"Volymiml" => &mut article.volume_ml,
            b"PrisPerLiter" => &mut article.price_per_litre,
            b"Saljstart" => &mut article.sold_since,
            b"Slutlev" => &mut article.discontinued_since,
            b"Varugrupp" => &mut article.product_group,
            b"Forpackning" => &mut article.container_type,
            b"Forslutning" => &mut article.sealing_type,
            b"Ursprung" => &mut article.origin,
            b"Ursprunglandnamn" => &mut article.origin_country,
            b"Producent" => &mut article.producer,
            b"Leverantor" => &mut article.distributor,
            b"Argang" => &mut article.vintage,
            b"Provadargang" => &mut article.tested_vintage,
            b"Alkoholhalt" => &mut article.alcohol_percentage,
            b"Sortiment" => &mut article.assortment,
            b"Ekologisk" => &mut article.organic,
            b"Koscher" => &mut article.kosher,
            b"RavarorBeskrivning" => &mut article.raw_materials,
            _ => return None,
        };
        Some(slot)
    }

    fn header_field(&mut self, path: &[Vec<u8>]) -> Option<&mut String> {
        match path {
            [tag] if tag == b"skapad-tid" => Some(&mut self.created_at),
            [block, tag] if block == b"info" && tag == b"meddelande" => {
                Some(&mut self.info.message)
            }
            _ => None,
        }
    }

    // The live feed sends skapad-tid as a child element; the attribute form
    // is accepted as well.
    fn root_attribute(&mut self, key: &[u8]) -> Option<&mut String> {
        (key == b"skapad-tid").then_some(&mut self.created_at)
    }

    fn push_record(&mut self, record: Article) {
        self.articles.push(record);
    }

    fn record_count(&self) -> usize {
        self.articles.len()
    }
}

impl Document for Stores {
    type Record = Store;

    const CONTEXT: &'static str = "store directory";
    const RECORD_TAG: &'static [u8] = b"ButikOmbud";

    fn record_field<'a>(store: &'a mut Store, tag: &[u8]) -> Option<&'a mut String> {
        let slot = match tag {
            b"Nr" => &mut store.number,
            b"Typ" => &mut store.kind,
            b"Address1" => &mut store.address1,
            b"Address2" => &mut store.address2,
            b"Address3" => &mut store.address3,
            b"Address4" => &mut store.address4,
            b"Address5" => &mut store.address5,
            b"Telefon" => &mut store.phone_number,
            b"ButiksTyp" => &mut store.store_type,
            b"Tjanster" => &mut store.services,
            b"SokOrd" => &mut store.search_words,
            b"Oppettider" => &mut store.opening_hours,
            b"RT90x" => &mut store.rt90_x,
            b"RT90y" => &mut store.rt90_y,
            _ => return None,
        };
        Some(slot)
    }

    fn header_field(&mut self, path: &[Vec<u8>]) -> Option<&mut String> {
        match path {
            [block, tag] if block == b"Info" && tag == b"Meddelande" => {
                Some(&mut self.info.message)
            }
            _ => None,
        }
    }

    fn push_record(&mut self, record: Store) {
        self.stores.push(record);
    }

    fn record_count(&self) -> usize {
        self.stores.len()
    }
}

// ---------------------------------------------------------------------------
// Event decoder
// ---------------------------------------------------------------------------

enum Progress {
    More,
    /// The root element has closed. Anything after it is ignored.
    Done,
}

struct DocumentBuilder<D: Document> {
    document: D,
    /// Names of the open elements, root first.
    path: Vec<Vec<u8>>,
    record: Option<D::Record>,
    /// Character data seen since the last start tag.
    text: String,
}

impl<D: Document> DocumentBuilder<D> {
    fn new() -> Self {
        Self {
            document: D::default(),
            path: Vec::new(),
            record: None,
            text: String::new(),
        }
    }

    fn feed(&mut self, event: Event<'_>) -> Result<Progress, DecodeFailure> {
        match event {
            Event::Start(e) => self.open(&e)?,
            Event::End(_) => return Ok(self.close()),
            Event::Text(e) => self.text.push_str(&e.unescape()?),
            Event::CData(e) => self.text.push_str(&String::from_utf8_lossy(e.as_ref())),
            Event::Eof => {
                return Err(match self.path.last() {
                    Some(open) => {
                        DecodeFailure::Truncated(String::from_utf8_lossy(open).into_owned())
                    }
                    None => DecodeFailure::NoRoot,
                });
            }
            _ => {}
        }
        Ok(Progress::More)
    }

    fn open(&mut self, start: &BytesStart<'_>) -> Result<(), DecodeFailure> {
        let name = start.name().as_ref().to_vec();
        if self.path.is_empty() {
            for attr in start.attributes() {
                let attr = attr.map_err(quick_xml::Error::from)?;
                if let Some(slot) = self.document.root_attribute(attr.key.as_ref()) {
                    *slot = attr.unescape_value()?.into_owned();
                }
            }
        } else if self.path.len() == 1 && name == D::RECORD_TAG {
            self.record = Some(D::Record::default());
        }
        self.path.push(name);
        self.text.clear();
        Ok(())
    }

    fn close(&mut self) -> Progress {
        match self.path.as_slice() {
            [_root] => return Progress::Done,
            [_, tag] if tag == D::RECORD_TAG => {
                if let Some(record) = self.record.take() {
                    self.document.push_record(record);
                }
            }
            [_, parent, tag] if parent == D::RECORD_TAG => {
                if let Some(slot) = self
                    .record
                    .as_mut()
                    .and_then(|record| D::record_field(record, tag))
                {
                    *slot = std::mem::take(&mut self.text);
                }
            }
            [_, below_root @ ..] if self.record.is_none() => {
                if let Some(slot) = self.document.header_field(below_root) {
                    *slot = std::mem::take(&mut self.text);
                }
            }
            _ => {}
        }
        self.path.pop();
        self.text.clear();
        Progress::More
    }

    fn finish(self) -> D {
        tracing::debug!(
            document = D::CONTEXT,
            records = self.document.record_count(),
            "decoded assortment document"
        );
        self.document
    }
}

fn xml_reader<R>(input: R) -> Reader<R> {
    let mut reader = Reader::from_reader(input);
    let config = reader.config_mut();
    config.trim_text(false);
    config.expand_empty_elements = true;
    reader
}

fn decode_error<D: Document>(source: DecodeFailure) -> CatalogError {
    CatalogError::Decode {
        context: D::CONTEXT.to_owned(),
        source,
    }
}

/// I/O failures come from the body source, not from the XML itself.
fn reader_error<D: Document>(err: quick_xml::Error) -> CatalogError {
    match err {
        quick_xml::Error::Io(source) => CatalogError::BodyRead {
            context: D::CONTEXT.to_owned(),
            source,
        },
        other => decode_error::<D>(DecodeFailure::Xml(other)),
    }
}

fn decode_document<D: Document>(input: impl BufRead) -> Result<D, CatalogError> {
    let mut reader = xml_reader(input);
    let mut builder = DocumentBuilder::<D>::new();
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(reader_error::<D>)?;
        if let Progress::Done = builder.feed(event).map_err(decode_error::<D>)? {
            break;
        }
        buf.clear();
    }

    Ok(builder.finish())
}

/// Decodes a document from an async byte source, one event at a time.
pub(crate) async fn decode_stream<D, R>(input: R) -> Result<D, CatalogError>
where
    D: Document,
    R: AsyncBufRead + Unpin,
{
    let mut reader = xml_reader(input);
    let mut builder = DocumentBuilder::<D>::new();
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into_async(&mut buf)
            .await
            .map_err(reader_error::<D>)?;
        if let Progress::Done = builder.feed(event).map_err(decode_error::<D>)? {
            break;
        }
        buf.clear();
    }

    Ok(builder.finish())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
