//! The capability shared by everything the player can point at

/// Something that can be highlighted while the cursor hovers over it.
///
/// Implement this on a component, then install `aura_controllers::HoverPlugin` for that
/// component type. Both methods may be called when the implementor is already in the requested
/// state, and should do nothing in that case.
pub trait Interactable {
    fn highlight(&mut self);
    fn unhighlight(&mut self);
}
