//! The per-type renderer: header, members, edges, notes.

use hashbrown::HashSet;
use tracing::{debug, trace, warn};

use crate::clip::Clip;
use crate::layers::Layers;
use crate::model::{MemberFlags, TypeDescriptor, TypeKind, TypeRef};
use crate::names;

use super::members;

/// Hook producing an optional note for a type; see
/// [`Renderer::with_note_hook`].
pub type NoteHook = Box<dyn Fn(&TypeDescriptor) -> Option<String> + Send + Sync>;

/// Configuration for a [`Renderer`].
#[derive(Clone, Debug)]
pub struct RendererOptions {
    /// Namespace prefixes whose inheritance and relationship edges are
    /// suppressed.
    pub exclusions: Vec<String>,
    /// Marker interfaces that never produce implements edges.
    pub ignored_interfaces: Vec<String>,
    /// Recursion cap for nested-type rendering.
    ///
    /// Nested containment is acyclic in practice; the cap guards against
    /// pathological provider output.
    ///
    /// Default: 16
    pub max_depth: usize,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            exclusions: vec!["System.".into(), "Windows.".into(), "Microsoft.".into()],
            ignored_interfaces: vec!["INullable".into()],
            max_depth: 16,
        }
    }
}

/// Renders one [`TypeDescriptor`] into a [`Clip`].
///
/// Stateless apart from its configuration; one renderer instance can serve
/// any number of types.
pub struct Renderer {
    options: RendererOptions,
    note_hook: Option<NoteHook>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererOptions::default())
    }
}

impl Renderer {
    pub fn new(options: RendererOptions) -> Self {
        Self {
            options,
            note_hook: None,
        }
    }

    /// Attach a hook that contributes one note segment per type.
    ///
    /// Notes only render when [`Layers::NOTES`] is requested; without a hook
    /// the notes layer stays empty.
    pub fn with_note_hook(
        mut self,
        hook: impl Fn(&TypeDescriptor) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.note_hook = Some(Box::new(hook));
        self
    }

    /// Render `ty` into a fresh clip.
    ///
    /// Only segments whose concern intersects `request` are emitted; the
    /// clip can afterwards be re-filtered down (but not up) via
    /// [`Clip::render_with`].
    pub fn render(&self, ty: &TypeDescriptor, request: Layers, include_attributes: bool) -> Clip {
        self.render_at(ty, request, include_attributes, 0)
    }

    fn render_at(
        &self,
        ty: &TypeDescriptor,
        request: Layers,
        include_attributes: bool,
        depth: usize,
    ) -> Clip {
        debug!(ty = %ty.full_name(), ?request, "rendering type");

        let mut clip = Clip::new(
            ty.display_name(),
            ty.full_name(),
            ty.namespace.clone(),
            ty.assembly.clone(),
        );
        let slug = clip.slug();

        self.header(ty, request, include_attributes, &mut clip);
        members::emit(ty, request, include_attributes, &mut clip);
        self.footer_and_nested(ty, request, include_attributes, depth, &mut clip);
        self.inheritance(ty, request, &slug, &mut clip);
        self.relationships(ty, request, &slug, &mut clip);
        self.notes(ty, request, &slug, &mut clip);

        clip
    }

    fn header(
        &self,
        ty: &TypeDescriptor,
        request: Layers,
        include_attributes: bool,
        clip: &mut Clip,
    ) {
        if !request.intersects(Layers::TYPE) {
            return;
        }

        let mut text = format!(
            "{} \"{}\" as {}",
            ty.kind.keyword(),
            clip.display_name(),
            clip.slug()
        );
        if ty.is_static {
            text.push_str(" << static >>");
        }
        text.push_str(" {");

        if include_attributes && !ty.attributes.is_empty() {
            text.push('\n');
            text.push_str(&members::attribute_line(&ty.attributes));
        }

        clip.push(Layers::TYPE, text);
    }

    fn footer_and_nested(
        &self,
        ty: &TypeDescriptor,
        request: Layers,
        include_attributes: bool,
        depth: usize,
        clip: &mut Clip,
    ) {
        if !request.intersects(Layers::TYPE) {
            return;
        }

        clip.push(Layers::TYPE_END, "}");

        if ty.nested.is_empty() {
            return;
        }
        if depth >= self.options.max_depth {
            warn!(
                ty = %ty.full_name(),
                depth,
                "nested-type depth cap reached, skipping inner types"
            );
            return;
        }

        for nested in &ty.nested {
            let inner = self.render_at(nested, request, include_attributes, depth + 1);
            let text = inner.render_with(request);
            clip.push(Layers::INNER_OBJECTS, text.trim_end_matches('\n').to_owned());
        }
    }

    fn inheritance(&self, ty: &TypeDescriptor, request: Layers, slug: &str, clip: &mut Clip) {
        if !request.intersects(Layers::INHERITANCE) {
            return;
        }

        if let Some(base) = &ty.base
            && !is_root_object(base)
        {
            let base_full = base.full_name();
            if !self.excluded(&base_full) {
                clip.push(
                    Layers::INHERITANCE,
                    format!("{slug} -u-|> {} : extends", names::slug(&base_full)),
                );
            }
        }

        let mut interfaces: Vec<&TypeRef> = ty.interfaces.iter().collect();
        interfaces.sort_by_key(|interface| interface.full_name());

        for interface in interfaces {
            let full = interface.full_name();
            if self.excluded(&full) {
                continue;
            }
            if self
                .options
                .ignored_interfaces
                .iter()
                .any(|marker| interface.base_name() == marker)
            {
                continue;
            }
            clip.push(
                Layers::INHERITANCE,
                format!("{slug} --() {} : implements", names::slug(&full)),
            );
        }
    }

    fn relationships(&self, ty: &TypeDescriptor, request: Layers, slug: &str, clip: &mut Clip) {
        if !request.intersects(Layers::RELATIONSHIPS) {
            return;
        }
        if ty.kind == TypeKind::Enum {
            trace!(ty = %ty.full_name(), "enum: no relationship edges");
            return;
        }

        // One dedup set spans fields and properties: one edge per distinct
        // target type across the whole clip.
        let mut mapped: HashSet<String> = HashSet::new();

        let fields = ty
            .fields
            .iter()
            .map(|field| (field.name.as_str(), &field.ty, field.flags));
        let properties = ty
            .properties
            .iter()
            .map(|property| (property.name.as_str(), &property.ty, property.flags));

        for (member_name, member_ty, flags) in fields.chain(properties) {
            if flags.intersects(MemberFlags::SYNTHETIC | MemberFlags::INHERITED) {
                continue;
            }
            if member_ty.is_event_handler() || member_ty.is_primitive() {
                continue;
            }
            if let Some(edge) = self.classify(slug, member_name, member_ty, &mut mapped) {
                clip.push(Layers::RELATIONSHIPS, edge);
            }
        }
    }

    /// Aggregation for arrays and sequence shapes, use otherwise; `None`
    /// when the target was already mapped or is edge-suppressed.
    fn classify(
        &self,
        slug: &str,
        member_name: &str,
        member_ty: &TypeRef,
        mapped: &mut HashSet<String>,
    ) -> Option<String> {
        let (target, tag, arrow) = if let Some(element) = member_ty.element.as_deref() {
            (element, "aggregation", "o-")
        } else if let Some(element) = member_ty.sequence_element() {
            (element, "aggregation", "o-")
        } else {
            (member_ty, "use", "->")
        };

        let full = target.full_name();
        if self.excluded(&full) {
            return None;
        }
        if !mapped.insert(target.key()) {
            return None;
        }

        Some(format!(
            "{slug} {arrow} {} : {member_name} << {tag} >>",
            names::slug(&full)
        ))
    }

    fn notes(&self, ty: &TypeDescriptor, request: Layers, slug: &str, clip: &mut Clip) {
        if !request.intersects(Layers::NOTES) {
            return;
        }
        let Some(hook) = &self.note_hook else {
            return;
        };
        if let Some(text) = hook(ty) {
            clip.push(
                Layers::NOTES,
                format!("note right of {slug}\n\t{text}\nend note"),
            );
        }
    }

    fn excluded(&self, full_name: &str) -> bool {
        self.options
            .exclusions
            .iter()
            .any(|prefix| full_name.starts_with(prefix))
    }
}

/// The universal root carries no extends edge.
fn is_root_object(base: &TypeRef) -> bool {
    base.name == "Object" && (base.namespace.is_empty() || base.namespace == "System")
}
