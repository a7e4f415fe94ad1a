//! Vocabulary constants used along the query path.

// Re-export the oxrdf vocabularies the translator emits terms from.
pub use oxrdf::vocab::{rdf, xsd};

/// [OSLC Core](https://open-services.net/ns/core#) vocabulary.
pub mod oslc {
    use oxrdf::NamedNodeRef;

    /// Describes a page of query results.
    pub const RESPONSE_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://open-services.net/ns/core#ResponseInfo");
    /// Link from a response info resource to the next page.
    pub const NEXT_PAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://open-services.net/ns/core#nextPage");
}

/// [Dublin Core terms](http://purl.org/dc/terms/) vocabulary.
pub mod dcterms {
    use oxrdf::NamedNodeRef;

    /// A name given to the resource.
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
}
