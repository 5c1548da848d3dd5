use crate::catalog::domain::{Coordinate, Location, Lookup, ModuleDescriptor, SkipReason, Variant};
use crate::ports::outbound::MetadataRepository;

/// Retries of one failed indirection fetch before the walk moves on to the
/// next variant.
pub const MAX_INDIRECTION_RETRIES: u32 = 3;

/// Longest chain of `available-at` pointers followed from the root descriptor.
pub const MAX_INDIRECTION_DEPTH: usize = 8;

/// Variants of one descriptor being walked.
struct Frame {
    /// Coordinate the variants were fetched from.
    origin: Coordinate,
    variants: Vec<Variant>,
    index: usize,
    retries: u32,
}

impl Frame {
    fn new(origin: Coordinate, variants: Vec<Variant>) -> Self {
        Self {
            origin,
            variants,
            index: 0,
            retries: 0,
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.retries = 0;
    }
}

enum Step {
    Found(String),
    /// Nothing to learn from the current variant.
    Advance,
    /// Every variant of the top frame was tried.
    Exhausted,
    Follow(Coordinate),
}

/// VariantGraphResolver walks the variants of a module descriptor to find
/// the Kotlin version it was compiled against.
///
/// The walk is an explicit state machine over a stack of frames, one per
/// descriptor on the current indirection chain; the depth is the stack height
/// minus one. At each step the variant at the top frame's index is inspected:
///
/// 1. An inline `kotlin-stdlib*` dependency with a resolvable version ends the
///    walk with that version.
/// 2. Otherwise an `available-at` pointer is followed by fetching the target
///    descriptor and pushing a frame over its variants. Pointers back into the
///    current chain and pointers beyond `MAX_INDIRECTION_DEPTH` are skipped.
/// 3. A failed fetch of the target retries the same variant up to
///    `MAX_INDIRECTION_RETRIES` times; a missing target is not retried.
/// 4. Anything else advances to the next variant. An exhausted frame is popped
///    and its parent advances; an exhausted root means the version is unknown.
///
/// Every step advances an index, increments a bounded retry counter, or pushes
/// a frame below the depth ceiling, so the walk always terminates. Network cost
/// is bounded by `variants × (MAX_INDIRECTION_RETRIES + 1)` per level.
pub struct VariantGraphResolver<'a, R: MetadataRepository> {
    repository: &'a R,
}

impl<'a, R: MetadataRepository> VariantGraphResolver<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Canonical cross-platform location advertised by the common variant.
    pub fn common_location(descriptor: &ModuleDescriptor) -> Result<&Location, SkipReason> {
        let common = descriptor
            .common_variant()
            .ok_or(SkipReason::NoCommonVariant)?;
        common
            .available_at
            .as_ref()
            .ok_or(SkipReason::NoCommonLocation)
    }

    /// Kotlin version the descriptor's variants were built against.
    ///
    /// `None` means the published metadata does not reveal it. Fetch failures
    /// along the way are absorbed by retry and fallback and never surface.
    pub async fn find_compiler_version(&self, descriptor: &ModuleDescriptor) -> Option<String> {
        let root = descriptor.coordinate();
        let mut stack = vec![Frame::new(root.clone(), descriptor.variants.clone())];

        while !stack.is_empty() {
            match Self::next_step(&stack) {
                Step::Found(version) => {
                    tracing::debug!(%root, depth = stack.len() - 1, %version, "found kotlin stdlib dependency");
                    return Some(version);
                }
                Step::Advance => Self::advance_top(&mut stack),
                Step::Exhausted => {
                    stack.pop();
                    Self::advance_top(&mut stack);
                }
                Step::Follow(target) => {
                    tracing::debug!(%root, %target, depth = stack.len(), "following variant indirection");
                    match self.repository.lookup_module_descriptor(&target).await {
                        Lookup::Found(next) => stack.push(Frame::new(target, next.variants)),
                        Lookup::NotFound => {
                            tracing::debug!(%root, %target, "indirection target not published");
                            Self::advance_top(&mut stack);
                        }
                        Lookup::TransientError(reason) => {
                            if let Some(frame) = stack.last_mut() {
                                frame.retries += 1;
                                if frame.retries > MAX_INDIRECTION_RETRIES {
                                    tracing::warn!(%root, %target, %reason, "giving up on variant indirection");
                                    frame.advance();
                                } else {
                                    tracing::debug!(%root, %target, retry = frame.retries, %reason, "retrying variant indirection");
                                }
                            }
                        }
                    }
                }
            }
        }

        tracing::debug!(%root, "kotlin version unknown");
        None
    }

    fn next_step(stack: &[Frame]) -> Step {
        let Some(frame) = stack.last() else {
            return Step::Exhausted;
        };
        let Some(variant) = frame.variants.get(frame.index) else {
            return Step::Exhausted;
        };

        // A retry only repeats the fetch; the inline scan already came up empty.
        if frame.retries == 0 {
            if let Some(version) = variant.inline_compiler_version() {
                return Step::Found(version.to_string());
            }
        }

        let Some(location) = variant.available_at.as_ref() else {
            return Step::Advance;
        };
        if stack.len() > MAX_INDIRECTION_DEPTH {
            return Step::Advance;
        }

        let target = location.coordinate();
        if stack.iter().any(|frame| frame.origin == target) {
            return Step::Advance;
        }
        Step::Follow(target)
    }

    fn advance_top(stack: &mut [Frame]) {
        if let Some(frame) = stack.last_mut() {
            frame.advance();
        }
    }
}
