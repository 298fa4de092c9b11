//! Record shapes consumed from the data providers and the nested bundle
//! emitted to the renderer.

mod bundle;
mod records;

pub use bundle::{
    ClusterRegion, InterproRef, Location, Match, PlotBundle, ProteinPanel, Region, RenderInfo,
    SampleStatistics, Track, TrackStatistics, TrackType,
};
pub use records::{ClusterRecord, DomainRecord, MutationRecord, ProteinAnnotation};
