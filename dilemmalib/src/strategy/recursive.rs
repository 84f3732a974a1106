//! Рекурсивный поиск подмножества: обход в глубину с возвратом.
//!
//! Кандидаты сортируются по возрастанию суммы (стабильно), затем на каждом
//! узле дерева по очереди добавляется один из оставшихся платежей, а потомку
//! передаётся только хвост списка после него. Так каждое подмножество
//! рассматривается ровно один раз.
//!
//! Если все суммы неотрицательны, а перевод положителен, ветка, частичная
//! сумма которой уже превысила перевод, дальше не раскрывается.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{
    error::{DilemmaError, Result},
    model::{exact_add, DuePayment, InputData},
    solution::Solution,
    traits::Strategy,
};

/// Счётчики одного запуска поиска.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub branches_pruned: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct RecursiveStrategy {
    pruning: bool,
    shortcut: bool,
}

impl Default for RecursiveStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveStrategy {
    pub fn new() -> Self {
        Self {
            pruning: true,
            shortcut: true,
        }
    }

    /// Отсечение работает только в режиме неотрицательных сумм; `false` выключает его совсем.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Предварительная проверка одиночного платежа, равного переводу.
    pub fn with_shortcut(mut self, shortcut: bool) -> Self {
        self.shortcut = shortcut;
        self
    }

    pub fn solve(&self, target: Decimal, candidates: &[DuePayment]) -> Result<Option<Solution>> {
        self.solve_with_stats(target, candidates)
            .map(|(solution, _)| solution)
    }

    pub fn solve_with_stats(
        &self,
        target: Decimal,
        candidates: &[DuePayment],
    ) -> Result<(Option<Solution>, SearchStats)> {
        let positive_only =
            target > Decimal::ZERO && candidates.iter().all(|p| p.amount >= Decimal::ZERO);

        // стабильная сортировка: равные суммы сохраняют входной порядок
        let mut sorted = candidates.to_vec();
        sorted.sort_by(DuePayment::by_amount);

        debug!(
            candidates = sorted.len(),
            %target,
            positive_only,
            "searching for a matching subset"
        );

        if self.shortcut {
            if let Some(single) = sorted.iter().find(|p| p.amount == target) {
                debug!("a single due payment matches the transfer");
                return Ok((
                    Some(Solution::new(vec![single.clone()])),
                    SearchStats::default(),
                ));
            }
        }

        let mut explorer = Explorer::new(target, self.pruning && positive_only);
        let mut subset = Vec::with_capacity(sorted.len());
        let solution = explorer.explore(&sorted, &mut subset, Decimal::ZERO)?;
        let stats = explorer.stats;

        debug!(
            found = solution.is_some(),
            nodes = stats.nodes_visited,
            pruned = stats.branches_pruned,
            "search finished"
        );

        Ok((solution, stats))
    }
}

impl Strategy for RecursiveStrategy {
    fn find_solution(&self, input: &InputData) -> Result<Option<Solution>> {
        let (transfer, due_payments) = input.parts()?;
        self.solve(transfer.amount, due_payments)
    }
}

struct Explorer {
    target: Decimal,
    prune: bool,
    stats: SearchStats,
}

impl Explorer {
    fn new(target: Decimal, prune: bool) -> Self {
        Self {
            target,
            prune,
            stats: SearchStats::default(),
        }
    }

    /// `subset` — текущая ветка, `sum` — её сумма. После возврата `None`
    /// ветка восстановлена в исходное состояние.
    fn explore<'a>(
        &mut self,
        remaining: &'a [DuePayment],
        subset: &mut Vec<&'a DuePayment>,
        sum: Decimal,
    ) -> Result<Option<Solution>> {
        self.stats.nodes_visited += 1;

        for (idx, payment) in remaining.iter().enumerate() {
            let next_sum = match exact_add(sum, payment.amount) {
                Ok(next_sum) => next_sum,
                // вне диапазона Decimal, но при неотрицательных суммах это заведомо перебор
                Err(DilemmaError::Overflow) if self.prune => {
                    self.stats.branches_pruned += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            subset.push(payment);

            if next_sum == self.target {
                trace!(size = subset.len(), "matching subset found");
                let items = subset.iter().map(|&p| p.clone()).collect();
                return Ok(Some(Solution::new(items)));
            }

            if self.prune && next_sum > self.target {
                self.stats.branches_pruned += 1;
                subset.pop();
                continue;
            }

            if let Some(solution) = self.explore(&remaining[idx + 1..], subset, next_sum)? {
                return Ok(Some(solution));
            }
            subset.pop();
        }

        Ok(None)
    }
}
