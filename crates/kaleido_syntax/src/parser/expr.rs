//! Expression Parser
//!
//! ```text
//! expression     ::= primary binoprhs
//! binoprhs       ::= (binop primary)*
//! primary        ::= identifierexpr | numberexpr | parenexpr
//! identifierexpr ::= identifier | identifier '(' (expression (',' expression)*)? ')'
//! parenexpr      ::= '(' expression ')'
//! ```

use super::{ParseResult, Parser, Rule};
use crate::ast::Expr;
use crate::lexer::Token;
use kaleido_diagnostics::{SpanExt, Suggestion};

impl<I: Iterator<Item = char>> Parser<I> {
    /// expression ::= primary binoprhs
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_primary()?;
        self.parse_bin_op_rhs(0, lhs)
    }

    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.token() {
            Token::Identifier(_) => self.parse_identifier_expr(),
            Token::Number(_) => self.parse_number_expr(),
            Token::Char('(') => self.parse_paren_expr(),
            _ => self.error(
                "unknown token when expecting an expression",
                Rule::Primary,
            ),
        }
    }

    fn parse_number_expr(&mut self) -> ParseResult<Expr> {
        let Token::Number(value) = *self.token() else {
            return self.error("expected a number", Rule::Primary);
        };
        let expr = Expr::number(value, self.current_span());
        self.advance(); // 吃掉数字
        Ok(expr)
    }

    pub fn parse_paren_expr(&mut self) -> ParseResult<Expr> {
        self.advance(); // 吃掉 '('
        let expr = self.parse_expression()?;

        if !self.at_char(')') {
            return self.error("expected ')'", Rule::ParenExpr);
        }
        self.advance(); // 吃掉 ')'
        Ok(expr)
    }

    pub fn parse_identifier_expr(&mut self) -> ParseResult<Expr> {
        // 先把名字拷贝出来，advance 之后当前 token 就变了
        let Token::Identifier(name) = self.token().clone() else {
            return self.error("expected an identifier", Rule::IdentifierExpr);
        };
        let start = self.current_span();
        self.advance();

        if !self.at_char('(') {
            return Ok(Expr::variable(name, start));
        }

        // 函数调用
        self.advance(); // 吃掉 '('
        let mut args = Vec::new();
        if !self.at_char(')') {
            loop {
                args.push(self.parse_expression()?);

                if self.at_char(')') {
                    break;
                }
                if !self.at_char(',') {
                    return self.error_with_help(
                        "Expected ')' or ',' in argument list",
                        Rule::IdentifierExpr,
                        Suggestion::new("separate call arguments with").with_replacement(","),
                    );
                }
                self.advance();
            }
        }

        let span = start.join(&self.current_span());
        self.advance(); // 吃掉 ')'
        Ok(Expr::call(name, args, span))
    }

    /// 优先级爬升。
    ///
    /// 只消费优先级不低于 `min_prec` 的运算符；后一个运算符结合得更紧时，
    /// 先以 `prec + 1` 递归解析右侧，因此同级运算符是左结合的。
    pub fn parse_bin_op_rhs(&mut self, min_prec: i32, mut lhs: Expr) -> ParseResult<Expr> {
        loop {
            let (op, prec) = match self.current_binop() {
                Some((op, prec)) if prec >= min_prec => (op, prec),
                _ => return Ok(lhs),
            };
            self.advance(); // 吃掉运算符

            let mut rhs = self.parse_primary()?;

            if self
                .current_binop()
                .is_some_and(|(_, next_prec)| prec < next_prec)
            {
                rhs = self.parse_bin_op_rhs(prec + 1, rhs)?;
            }

            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    /// 当前 token 作为二元运算符时的字符和优先级
    fn current_binop(&self) -> Option<(char, i32)> {
        let prec = self.precedence_table().precedence(self.token())?;
        self.token().as_char().map(|op| (op, prec))
    }
}

#[cfg(test)]
mod tests {
    use super::super::ParseError;
    use super::*;
    use crate::ast::ExprKind;
    use crate::lexer::Lexer;
    use crate::precedence::PrecedenceTable;

    fn parse(source: &str) -> ParseResult<Expr> {
        Parser::from_source(source).parse_expression()
    }

    fn sexpr(source: &str) -> String {
        match parse(source) {
            Ok(expr) => expr.to_string(),
            Err(e) => panic!("Parse of {:?} failed: {}", source, e),
        }
    }

    fn err(source: &str) -> ParseError {
        match parse(source) {
            Ok(expr) => panic!("Expected parse of {:?} to fail, got {}", source, expr),
            Err(e) => e,
        }
    }

    #[test]
    fn test_precedence_shapes_tree() {
        let expr = parse("1+2*3").unwrap();
        match expr.kind {
            ExprKind::Binary { op, lhs, rhs } => {
                assert_eq!(op, '+');
                assert_eq!(lhs.kind, ExprKind::Number(1.0));
                assert!(matches!(rhs.kind, ExprKind::Binary { op: '*', .. }));
            }
            other => panic!("Expected binary expr, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associativity() {
        let expr = parse("1-2-3").unwrap();
        match expr.kind {
            ExprKind::Binary { op, lhs, rhs } => {
                assert_eq!(op, '-');
                assert_eq!(lhs.to_string(), "(- 1 2)");
                assert_eq!(rhs.kind, ExprKind::Number(3.0));
            }
            other => panic!("Expected binary expr, got {:?}", other),
        }
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse("(1+2)*3").unwrap();
        assert!(matches!(expr.kind, ExprKind::Binary { op: '*', .. }));
        assert_eq!(expr.to_string(), "(* (+ 1 2) 3)");
    }

    #[test]
    fn test_mixed_precedence_levels() {
        assert_eq!(sexpr("a<b+c*d"), "(< a (+ b (* c d)))");
        assert_eq!(sexpr("a*b+c<d"), "(< (+ (* a b) c) d)");
        assert_eq!(sexpr("a+b*c-d"), "(- (+ a (* b c)) d)");
        assert_eq!(sexpr("a*b*c"), "(* (* a b) c)");
        assert_eq!(sexpr("x<y<z"), "(< (< x y) z)");
    }

    #[test]
    fn test_call_arguments_in_order() {
        let expr = parse("foo(1, 2)").unwrap();
        match expr.kind {
            ExprKind::Call { callee, args } => {
                assert_eq!(callee, "foo");
                assert_eq!(args.len(), 2);
                assert_eq!(args[0].kind, ExprKind::Number(1.0));
                assert_eq!(args[1].kind, ExprKind::Number(2.0));
            }
            other => panic!("Expected call, got {:?}", other),
        }
        assert_eq!(expr.span, 0..9);
    }

    #[test]
    fn test_calls_and_variables() {
        assert_eq!(sexpr("f()"), "(call f)");
        assert_eq!(sexpr("f(a+1, g(b))*2"), "(* (call f (+ a 1) (call g b)) 2)");
        assert_eq!(sexpr("x"), "x");
    }

    #[test]
    fn test_stops_at_non_operator() {
        let mut parser = Parser::from_source("a+b c");
        let expr = parser.parse_expression().unwrap();
        assert_eq!(expr.to_string(), "(+ a b)");
        assert_eq!(parser.token(), &Token::Identifier("c".to_string()));

        let mut parser = Parser::from_source("1 ; 2");
        assert_eq!(parser.parse_expression().unwrap().to_string(), "1");
        assert!(parser.token().is_char(';'));
    }

    #[test]
    fn test_unknown_token_error() {
        let e = err(")");
        assert_eq!(e.message, "unknown token when expecting an expression");
        assert_eq!(e.rule, Rule::Primary);
        assert_eq!(e.span, 0..1);

        assert_eq!(err("").message, "unknown token when expecting an expression");
        assert_eq!(err("1 +").rule, Rule::Primary);
    }

    #[test]
    fn test_missing_close_paren() {
        let e = err("(1+2");
        assert_eq!(e.message, "expected ')'");
        assert_eq!(e.rule, Rule::ParenExpr);
        assert_eq!(e.span, 4..5);
    }

    #[test]
    fn test_bad_argument_list() {
        let e = err("foo(1 2)");
        assert_eq!(e.message, "Expected ')' or ',' in argument list");
        assert_eq!(e.rule, Rule::IdentifierExpr);
        assert_eq!(e.span, 6..7);
        assert_eq!(
            e.help.map(|h| h.to_string()).as_deref(),
            Some("separate call arguments with `,`")
        );

        assert_eq!(err("foo(1,)").rule, Rule::Primary);
    }

    #[test]
    fn test_error_does_not_consume_offending_token() {
        let mut parser = Parser::from_source("(1 ] 2");
        assert!(parser.parse_expression().is_err());
        assert!(parser.token().is_char(']'));
    }

    #[test]
    fn test_custom_operator_table() {
        let mut table = PrecedenceTable::default();
        table.install('/', 40);
        table.install('^', 60);
        let mut parser = Parser::with_precedence(Lexer::from_source("a/b^c+d"), table);
        let expr = parser.parse_expression().unwrap();
        assert_eq!(expr.to_string(), "(+ (/ a (^ b c)) d)");
    }

    #[test]
    fn test_without_operators_only_primary_is_parsed() {
        let mut parser =
            Parser::with_precedence(Lexer::from_source("1+2"), PrecedenceTable::empty());
        assert_eq!(parser.parse_expression().unwrap().to_string(), "1");
        assert!(parser.token().is_char('+'));
    }

    #[test]
    fn test_deep_nesting() {
        let source = format!("{}x{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(sexpr(&source), "x");
    }
}
