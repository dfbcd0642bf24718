//! Stacking rules

use crate::tokens::{Token, TokenType};

/// Maximum number of tokens in one stack
pub const MAX_STACK_HEIGHT: usize = 3;

/// Can a token of kind `candidate` go on top of `stack` (bottom to top)?
///
/// Any token may start a stack. On a non-empty stack:
/// - mountain only on mountain
/// - tree only on one or two brown tokens
/// - field and water only at ground level
/// - house on brown, mountain or house
/// - brown only on brown
pub fn can_place(candidate: TokenType, stack: &[Token]) -> bool {
    if stack.len() >= MAX_STACK_HEIGHT {
        return false;
    }

    let top = match stack.last() {
        Some(top) => top.kind,
        None => return true,
    };

    match candidate {
        TokenType::Mountain => top == TokenType::Mountain,
        TokenType::Tree => stack.len() <= 2 && stack.iter().all(|t| t.kind == TokenType::Brown),
        TokenType::Field | TokenType::Water => false,
        TokenType::House => matches!(
            top,
            TokenType::Brown | TokenType::Mountain | TokenType::House
        ),
        TokenType::Brown => top == TokenType::Brown,
    }
}

/// Token-level form of [`can_place`]
pub fn can_place_token(candidate: &Token, stack: &[Token]) -> bool {
    can_place(candidate.kind, stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType::*;

    fn stack(kinds: &[TokenType]) -> Vec<Token> {
        kinds.iter().map(|&k| Token::of(k)).collect()
    }

    #[test]
    fn test_anything_on_empty_ground() {
        for t in TokenType::ALL {
            assert!(can_place(t, &[]), "{} should start a stack", t);
        }
    }

    #[test]
    fn test_full_stack_rejects_everything() {
        let full_stacks = [
            stack(&[Brown, Brown, Brown]),
            stack(&[Mountain, Mountain, Mountain]),
            stack(&[Brown, House, House]),
            stack(&[Brown, Brown, Tree]),
        ];
        for s in &full_stacks {
            for t in TokenType::ALL {
                assert!(!can_place(t, s));
            }
        }
    }

    #[test]
    fn test_mountain_only_on_mountain() {
        for base in [Tree, House, Water, Field, Brown] {
            assert!(!can_place(Mountain, &stack(&[base])));
        }
        assert!(can_place(Mountain, &stack(&[Mountain])));
        assert!(can_place(Mountain, &stack(&[Mountain, Mountain])));
        assert!(!can_place(Mountain, &stack(&[Mountain, Mountain, Mountain])));
    }

    #[test]
    fn test_tree_on_brown_base() {
        assert!(can_place(Tree, &stack(&[Brown])));
        assert!(can_place(Tree, &stack(&[Brown, Brown])));
        assert!(!can_place(Tree, &stack(&[Brown, Brown, Brown])));
        assert!(!can_place(Tree, &stack(&[Brown, Mountain])));
        for base in [Tree, House, Water, Mountain, Field] {
            assert!(!can_place(Tree, &stack(&[base])));
        }
    }

    #[test]
    fn test_field_and_water_ground_level_only() {
        for t in [Field, Water] {
            assert!(can_place(t, &[]));
            assert!(!can_place(t, &stack(&[Brown])));
            assert!(!can_place(t, &stack(&[Mountain])));
            assert!(!can_place(t, &stack(&[t])));
        }
    }

    #[test]
    fn test_house_bases() {
        assert!(can_place(House, &stack(&[Brown])));
        assert!(can_place(House, &stack(&[Brown, Brown])));
        assert!(can_place(House, &stack(&[Mountain])));
        assert!(can_place(House, &stack(&[Mountain, Mountain])));
        assert!(can_place(House, &stack(&[House])));
        assert!(can_place(House, &stack(&[Brown, House])));
        for base in [Tree, Water, Field] {
            assert!(!can_place(House, &stack(&[base])));
        }
        assert!(!can_place(House, &stack(&[Brown, Tree])));
        assert!(!can_place(House, &stack(&[Brown, House, House])));
    }

    #[test]
    fn test_brown_only_on_brown() {
        assert!(can_place(Brown, &stack(&[Brown])));
        assert!(can_place(Brown, &stack(&[Brown, Brown])));
        for base in [Tree, House, Water, Field, Mountain] {
            assert!(!can_place(Brown, &stack(&[base])));
        }
        assert!(!can_place(Brown, &stack(&[Brown, Tree])));
    }

    #[test]
    fn test_token_form_ignores_id_and_color() {
        let mut odd = Token::new(Tree, "anything");
        odd.color = "#FFFFFF".into();
        assert!(can_place_token(&odd, &stack(&[Brown])));
        assert!(!can_place_token(&odd, &stack(&[Water])));
    }
}
